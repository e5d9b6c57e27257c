use soroban_sdk::{Env, U256};

pub fn u256_max(e: &Env) -> U256 {
    U256::from_parts(e, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

// Checked arithmetic on host 256-bit integers.
// Host `add`/`sub` trap on overflow, so callers that need a typed error
// must go through these first.
pub trait CheckedMath: Sized {
    fn safe_add(&self, other: &Self) -> Option<Self>;
    fn safe_sub(&self, other: &Self) -> Option<Self>;
}

impl CheckedMath for U256 {
    fn safe_add(&self, other: &U256) -> Option<U256> {
        let headroom = u256_max(self.env()).sub(self);
        if other > &headroom {
            return None;
        }
        Some(self.add(other))
    }

    fn safe_sub(&self, other: &U256) -> Option<U256> {
        if other > self {
            return None;
        }
        Some(self.sub(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_add() {
        let e = Env::default();
        let max = u256_max(&e);
        let one = U256::from_u32(&e, 1);

        assert_eq!(
            U256::from_u32(&e, 2).safe_add(&U256::from_u32(&e, 3)),
            Some(U256::from_u32(&e, 5))
        );
        assert_eq!(max.sub(&one).safe_add(&one), Some(max.clone()));
        assert_eq!(max.safe_add(&one), None);
        assert_eq!(max.safe_add(&U256::from_u32(&e, 0)), Some(max));
    }

    #[test]
    fn test_safe_sub() {
        let e = Env::default();
        let seven = U256::from_u32(&e, 7);

        assert_eq!(
            seven.safe_sub(&U256::from_u32(&e, 7)),
            Some(U256::from_u32(&e, 0))
        );
        assert_eq!(
            seven.safe_sub(&U256::from_u32(&e, 2)),
            Some(U256::from_u32(&e, 5))
        );
        assert_eq!(seven.safe_sub(&U256::from_u32(&e, 8)), None);
    }
}
