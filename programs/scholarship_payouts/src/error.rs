use anchor_lang::prelude::*;

#[error_code]
pub enum ScholarshipError {
    /// 6000 0x1770
    #[msg("Payout amount must be greater than zero")]
    InvalidAmount,
    /// 6001 0x1771
    #[msg("Payout amount exceeds the available balance")]
    InsufficientBalance,
    /// 6002 0x1772
    #[msg("Zelle payouts need an email or a phone number")]
    ZelleContactMissing,
    /// 6003 0x1773
    #[msg("Zelle payouts take either an email or a phone number, not both")]
    ZelleContactAmbiguous,
    /// 6004 0x1774
    #[msg("Bank transfers need bank name, account name, routing and account numbers")]
    BankDetailsMissing,
    /// 6005 0x1775
    #[msg("Stripe payouts need a Stripe email")]
    StripeEmailMissing,
    /// 6006 0x1776
    #[msg("Payout detail field is too long")]
    DetailTooLong,
    /// 6007 0x1777
    #[msg("Payout request cannot move to that status from its current one")]
    InvalidStatusTransition,
    /// 6008 0x1778
    #[msg("Featured scholarships limit is reached")]
    CapacityExceeded,
    /// 6009 0x1779
    #[msg("Scholarship is already highlighted")]
    AlreadyHighlighted,
    /// 6010 0x177a
    #[msg("Scholarship is not highlighted")]
    NotHighlighted,
    /// 6011 0x177b
    #[msg("University's limit of open payout requests is reached")]
    OpenRequestsLimit,
    /// 6012 0x177c
    #[msg("Application fee is already paid")]
    FeeAlreadyPaid,
    /// 6013 0x177d
    #[msg("Admin notes are too long")]
    AdminNotesTooLong,
    /// 6014 0x177e
    #[msg("Arithmetic overflow in ledger totals")]
    ArithmeticOverflow,
}
