use crate::domain::payout::PayoutBreakdown;
use crate::domain::ports::{AuthenticatorBox, RecordStoreBox};
use crate::domain::rates::RateTable;
use crate::domain::record::{ParticipantRecord, StudentId};
use crate::error::{PayoutError, Result};
use log::{debug, info, warn};
use serde::Serialize;

/// The answer to a successful lookup: the matching record and what it pays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub record: ParticipantRecord,
    pub breakdown: PayoutBreakdown,
}

impl Statement {
    pub fn for_record(record: ParticipantRecord, rates: &RateTable) -> Self {
        let breakdown = PayoutBreakdown::compute(&record, rates);
        Self { record, breakdown }
    }
}

/// Entry point for payout lookups.
pub struct LookupService {
    record_store: RecordStoreBox,
    authenticator: AuthenticatorBox,
    rates: RateTable,
}

impl LookupService {
    /// Creates a new `LookupService`.
    ///
    /// # Arguments
    ///
    /// * `record_store` - The loaded participant records.
    /// * `authenticator` - The gate every session must pass.
    /// * `rates` - Unit prices used for every statement.
    pub fn new(
        record_store: RecordStoreBox,
        authenticator: AuthenticatorBox,
        rates: RateTable,
    ) -> Self {
        Self {
            record_store,
            authenticator,
            rates,
        }
    }

    /// Checks the credential and, if accepted, hands out a session.
    pub async fn open_session(&self, credential: &str) -> Result<Session<'_>> {
        if self.authenticator.authenticate(credential).await {
            info!("session opened");
            Ok(Session { service: self })
        } else {
            warn!("rejected credential");
            Err(PayoutError::AccessDenied)
        }
    }
}

/// An authenticated view over a [`LookupService`].
pub struct Session<'a> {
    service: &'a LookupService,
}

impl Session<'_> {
    pub fn rates(&self) -> &RateTable {
        &self.service.rates
    }

    /// Resolves a raw identifier and prices the matching record.
    ///
    /// Blank input yields `EmptyInput` without touching the store; an unknown
    /// id yields `NotFound`. Both leave the session usable.
    pub async fn lookup(&self, raw_id: &str) -> Result<Statement> {
        let student_id = StudentId::parse(raw_id).ok_or(PayoutError::EmptyInput)?;
        debug!("looking up {}", student_id);

        let record = self
            .service
            .record_store
            .find(&student_id)
            .await?
            .ok_or_else(|| PayoutError::NotFound(student_id.to_string()))?;

        Ok(Statement::for_record(record, &self.service.rates))
    }

    /// Statements for every loaded record, in source order.
    pub async fn statements(&self) -> Result<Vec<Statement>> {
        let records = self.service.record_store.all().await?;
        Ok(records
            .into_iter()
            .map(|r| Statement::for_record(r, &self.service.rates))
            .collect())
    }
}
