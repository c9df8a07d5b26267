use log::info;
use uuid::Uuid;
use crate::common::common::current_time;
use crate::portfolio::enums::contact_error::ContactError;
use crate::portfolio::enums::contact_status::ContactStatus;
use crate::portfolio::enums::tracking_error::TrackingError;
use crate::portfolio::structs::contact_form::ContactForm;
use crate::portfolio::structs::contact_submission::ContactSubmission;
use crate::portfolio::structs::portfolio_tracker::PortfolioTracker;
use crate::stats::enums::stats_event::StatsEvent;

impl PortfolioTracker {
    /// Validates and stores a contact-form submission. A store failure is
    /// surfaced to the caller instead of being silently reported as success.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn submit_contact(&self, form: &ContactForm, origin_address: String) -> Result<ContactSubmission, ContactError>
    {
        if let Err(field) = form.validate() {
            self.update_stats(StatsEvent::ContactsRejected, 1);
            return Err(ContactError::Validation(field));
        }

        let submission = ContactSubmission {
            id: Uuid::new_v4().to_string(),
            name: form.name.clone().unwrap_or_default(),
            email: form.email.clone().unwrap_or_default(),
            message: form.message.clone().unwrap_or_default(),
            submitted_at: current_time(),
            status: ContactStatus::New,
            origin_address,
        };

        let sqlx = self.sqlx.as_ref().ok_or(TrackingError::StoreUnavailable)?;
        self.with_timeout(sqlx.insert_contact(&self.config, &submission)).await?;

        self.update_stats(StatsEvent::ContactsAccepted, 1);
        info!("[CONTACTS] Stored submission {} from {}", submission.id, submission.origin_address);
        Ok(submission)
    }

    pub async fn list_contacts(&self) -> Result<Vec<ContactSubmission>, TrackingError>
    {
        let sqlx = self.sqlx.as_ref().ok_or(TrackingError::StoreUnavailable)?;
        self.with_timeout(sqlx.list_contacts(&self.config, self.config.api.contacts_limit)).await
    }
}
