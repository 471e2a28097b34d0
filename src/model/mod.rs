/// Judgements of hit objects and their weights.
pub mod hit_result;
