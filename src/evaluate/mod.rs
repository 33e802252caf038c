pub(crate) mod expression;
pub(crate) mod roll;
