use crate::{config::*, error::*, ledger::*, state::*};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PayoutEvent {
    Approve,
    MarkPaid,
    Reject,
    Cancel,
}

impl PayoutStatus {
    pub fn apply(self, event: PayoutEvent) -> Result<PayoutStatus, ScholarshipError> {
        use PayoutEvent::*;
        use PayoutStatus::*;

        match (self, event) {
            (Pending, Approve) => Ok(Approved),
            (Approved, MarkPaid) => Ok(Paid),
            (Pending | Approved, Reject) => Ok(Rejected),
            (Pending, Cancel) => Ok(Cancelled),
            _ => Err(ScholarshipError::InvalidStatusTransition),
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PayoutStatus::Paid | PayoutStatus::Rejected | PayoutStatus::Cancelled
        )
    }

    /// Whether a request in this status holds part of the balance.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            PayoutStatus::Pending | PayoutStatus::Approved | PayoutStatus::Paid
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DetailsError {
    ZelleContactMissing,
    ZelleContactAmbiguous,
    BankDetailsMissing,
    StripeEmailMissing,
    DetailTooLong,
}

impl From<DetailsError> for ScholarshipError {
    fn from(e: DetailsError) -> Self {
        match e {
            DetailsError::ZelleContactMissing => ScholarshipError::ZelleContactMissing,
            DetailsError::ZelleContactAmbiguous => ScholarshipError::ZelleContactAmbiguous,
            DetailsError::BankDetailsMissing => ScholarshipError::BankDetailsMissing,
            DetailsError::StripeEmailMissing => ScholarshipError::StripeEmailMissing,
            DetailsError::DetailTooLong => ScholarshipError::DetailTooLong,
        }
    }
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().map_or(false, |v| !v.trim().is_empty())
}

impl PayoutDetails {
    fn fields(&self) -> [&Option<String>; PayoutDetails::FIELDS] {
        [
            &self.zelle_email,
            &self.zelle_phone,
            &self.account_name,
            &self.bank_name,
            &self.routing_number,
            &self.account_number,
            &self.swift,
            &self.iban,
            &self.stripe_email,
            &self.stripe_account_id,
        ]
    }

    pub fn validate(&self, method: PayoutMethod) -> Result<(), DetailsError> {
        if self
            .fields()
            .into_iter()
            .any(|f| f.as_deref().map_or(false, |v| v.len() > MAX_DETAIL_LEN))
        {
            return Err(DetailsError::DetailTooLong);
        }

        match method {
            PayoutMethod::Zelle => {
                match (present(&self.zelle_email), present(&self.zelle_phone)) {
                    (true, true) => Err(DetailsError::ZelleContactAmbiguous),
                    (false, false) => Err(DetailsError::ZelleContactMissing),
                    _ => Ok(()),
                }
            }
            PayoutMethod::BankTransfer => {
                let complete = [
                    &self.bank_name,
                    &self.account_name,
                    &self.routing_number,
                    &self.account_number,
                ]
                .into_iter()
                .all(present);
                if complete {
                    Ok(())
                } else {
                    Err(DetailsError::BankDetailsMissing)
                }
            }
            PayoutMethod::Stripe => {
                if present(&self.stripe_email) {
                    Ok(())
                } else {
                    Err(DetailsError::StripeEmailMissing)
                }
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    InvalidAmount,
    InsufficientBalance { shortfall: u64 },
    InvalidPayoutDetails(DetailsError),
}

impl From<SubmissionError> for ScholarshipError {
    fn from(e: SubmissionError) -> Self {
        match e {
            SubmissionError::InvalidAmount => ScholarshipError::InvalidAmount,
            SubmissionError::InsufficientBalance { .. } => ScholarshipError::InsufficientBalance,
            SubmissionError::InvalidPayoutDetails(e) => e.into(),
        }
    }
}

/// Guards creation of a payout request. Checks run in a fixed order:
/// amount, balance, then details.
pub fn validate_submission(
    amount: u64,
    balance: &BalanceSnapshot,
    method: PayoutMethod,
    details: &PayoutDetails,
) -> Result<(), SubmissionError> {
    if amount == 0 {
        return Err(SubmissionError::InvalidAmount);
    }
    if let Some(shortfall) = balance.shortfall(amount) {
        return Err(SubmissionError::InsufficientBalance { shortfall });
    }
    details
        .validate(method)
        .map_err(SubmissionError::InvalidPayoutDetails)
}
