use anchor_lang::prelude::*;

#[constant]
pub const FEATURED_CAPACITY: usize = 6;
#[constant]
pub const DEPENDENT_SURCHARGE: u64 = 100;
#[constant]
pub const OPEN_REQUESTS_CAPACITY: usize = 16;
#[constant]
pub const MAX_DETAIL_LEN: usize = 64;
#[constant]
pub const MAX_ADMIN_NOTES_LEN: usize = 256;
