pub use crate::instructions::{
    create_scholarship::*, feature_scholarship::*, initialize::*, record_application_fee::*,
    register_university::*, review_payout_request::*, submit_payout_request::*,
};

pub mod create_scholarship;
pub mod feature_scholarship;
pub mod initialize;
pub mod record_application_fee;
pub mod register_university;
pub mod review_payout_request;
pub mod submit_payout_request;
