use std::cell::{Cell, Ref, RefCell};

use crate::contact::draft::{ContactDraft, ContactField, ContactRequest};
use crate::contact::transport::ContactTransport;
use crate::error::{ContactError, SubmitRejected};

pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully. I'll get back to you soon.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Draft plus submission status for the contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn update(&mut self, field: ContactField, value: String) {
        self.draft.set(field, value);
    }

    /// Validate the draft and mark the form in flight.
    ///
    /// Nothing changes when the submission is rejected.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, SubmitRejected> {
        if self.is_sending() {
            return Err(SubmitRejected::AlreadySending);
        }
        if let Some(field) = self.draft.missing_field() {
            return Err(SubmitRejected::Incomplete(field));
        }
        self.status = SubmitStatus::Sending;
        Ok(ContactRequest::from_draft(&self.draft))
    }

    /// Apply the outcome of the request started by `begin_submit`.
    pub fn finish(&mut self, result: Result<(), ContactError>) {
        match result {
            Ok(()) => {
                self.draft = ContactDraft::default();
                self.status = SubmitStatus::Sent;
            }
            Err(_) => {
                self.status = SubmitStatus::Failed(GENERIC_ERROR.to_string());
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed,
    /// The session was detached before the answer came back.
    Abandoned,
}

/// A contact form bound to a mounted component.
///
/// `on_change` runs after every visible state change so the owner can
/// re-render. Once detached the session ignores late results and stops
/// notifying.
pub struct ContactSession {
    form: RefCell<ContactForm>,
    attached: Cell<bool>,
    on_change: Box<dyn Fn()>,
}

impl ContactSession {
    pub fn new(on_change: impl Fn() + 'static) -> Self {
        Self {
            form: RefCell::new(ContactForm::default()),
            attached: Cell::new(true),
            on_change: Box::new(on_change),
        }
    }

    pub fn form(&self) -> Ref<'_, ContactForm> {
        self.form.borrow()
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    pub fn detach(&self) {
        self.attached.set(false);
    }

    pub fn update(&self, field: ContactField, value: String) {
        self.form.borrow_mut().update(field, value);
        self.notify();
    }

    /// Send the current draft once. No retries; a second call while the
    /// first is in flight is rejected without touching the transport.
    pub async fn submit<T>(&self, transport: &T) -> Result<SubmitOutcome, SubmitRejected>
    where
        T: ContactTransport + ?Sized,
    {
        let request = self.form.borrow_mut().begin_submit()?;
        self.notify();

        let result = transport.deliver(&request).await;
        if !self.is_attached() {
            log::debug!("Contact form unmounted, dropping submission result");
            return Ok(SubmitOutcome::Abandoned);
        }

        let outcome = match &result {
            Ok(()) => {
                log::info!("Contact message delivered");
                SubmitOutcome::Delivered
            }
            Err(e) => {
                log::error!("Contact message failed: {}", e);
                SubmitOutcome::Failed
            }
        };
        self.form.borrow_mut().finish(result);
        self.notify();
        Ok(outcome)
    }

    fn notify(&self) {
        if self.is_attached() {
            (self.on_change)();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;

    use super::*;
    use crate::error::ApiError;

    struct RecordingTransport {
        sent: RefCell<Vec<ContactRequest>>,
        reply: Result<(), ContactError>,
    }

    impl RecordingTransport {
        fn answering(reply: Result<(), ContactError>) -> Self {
            Self { sent: RefCell::new(Vec::new()), reply }
        }
    }

    impl ContactTransport for RecordingTransport {
        fn deliver<'a>(&'a self, request: &'a ContactRequest) -> LocalBoxFuture<'a, Result<(), ContactError>> {
            self.sent.borrow_mut().push(request.clone());
            let reply = self.reply.clone();
            Box::pin(async move { reply })
        }
    }

    /// Holds the request open until the test releases the gate.
    struct GatedTransport {
        gate: RefCell<Option<oneshot::Receiver<Result<(), ContactError>>>>,
        calls: Cell<usize>,
    }

    impl ContactTransport for GatedTransport {
        fn deliver<'a>(&'a self, _request: &'a ContactRequest) -> LocalBoxFuture<'a, Result<(), ContactError>> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            Box::pin(async move {
                match gate {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(ApiError::Network("gate dropped".into()).into())),
                    None => Err(ApiError::Network("no gate".into()).into()),
                }
            })
        }
    }

    fn gated() -> (GatedTransport, oneshot::Sender<Result<(), ContactError>>) {
        let (tx, rx) = oneshot::channel();
        let transport = GatedTransport { gate: RefCell::new(Some(rx)), calls: Cell::new(0) };
        (transport, tx)
    }

    fn fill(session: &ContactSession) {
        session.update(ContactField::Name, "Youssef".into());
        session.update(ContactField::Email, "youssef@example.org".into());
        session.update(ContactField::Organization, "production".into());
        session.update(ContactField::ProjectType, "Documentary Post-Production".into());
        session.update(ContactField::Message, "Feature doc, 90 min, needs grading.".into());
    }

    fn counting_session() -> (ContactSession, Rc<Cell<usize>>) {
        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();
        let session = ContactSession::new(move || counter.set(counter.get() + 1));
        (session, renders)
    }

    #[test]
    fn begin_submit_marks_form_in_flight() {
        let mut form = ContactForm::default();
        for field in ContactField::ALL {
            form.update(field, "x".into());
        }
        let request = form.begin_submit().unwrap();
        assert_eq!(request.name, "x");
        assert!(form.is_sending());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySending));
    }

    #[test]
    fn finish_with_error_keeps_the_draft() {
        let mut form = ContactForm::default();
        for field in ContactField::ALL {
            form.update(field, "kept".into());
        }
        form.begin_submit().unwrap();
        form.finish(Err(ContactError::Status(500)));
        assert_eq!(form.status(), &SubmitStatus::Failed(GENERIC_ERROR.to_string()));
        assert_eq!(form.draft().message, "kept");

        // the user can simply try again
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn every_edit_asks_the_owner_to_redraw() {
        let (session, renders) = counting_session();
        session.update(ContactField::Name, "Y".into());
        session.update(ContactField::Name, "Yo".into());
        assert_eq!(renders.get(), 2);
        assert_eq!(session.form().draft().name, "Yo");

        session.detach();
        session.update(ContactField::Name, "You".into());
        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn successful_submission_resets_the_draft() {
        let (session, renders) = counting_session();
        fill(&session);
        let transport = RecordingTransport::answering(Ok(()));

        let outcome = block_on(session.submit(&transport));

        assert_eq!(outcome, Ok(SubmitOutcome::Delivered));
        assert_eq!(session.form().status(), &SubmitStatus::Sent);
        assert!(session.form().draft().is_empty());
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "youssef@example.org");
        assert!(sent[0].message.contains("Project Type: Documentary Post-Production"));
        // five edits, then sending, then done
        assert_eq!(renders.get(), 7);
    }

    #[test]
    fn failed_submission_shows_error_and_keeps_values() {
        let (session, _) = counting_session();
        fill(&session);
        let before = session.form().draft().clone();
        let transport = RecordingTransport::answering(Err(ContactError::Status(502)));

        let outcome = block_on(session.submit(&transport));

        assert_eq!(outcome, Ok(SubmitOutcome::Failed));
        assert_eq!(session.form().status(), &SubmitStatus::Failed(GENERIC_ERROR.to_string()));
        assert_eq!(session.form().draft(), &before);
    }

    #[test]
    fn timeout_is_reported_as_generic_failure() {
        let (session, _) = counting_session();
        fill(&session);
        let transport = RecordingTransport::answering(Err(ApiError::Timeout(15_000).into()));

        assert_eq!(block_on(session.submit(&transport)), Ok(SubmitOutcome::Failed));
        assert_eq!(session.form().status(), &SubmitStatus::Failed(GENERIC_ERROR.to_string()));
    }

    #[test]
    fn incomplete_draft_never_reaches_the_network() {
        let (session, _) = counting_session();
        session.update(ContactField::Name, "Only a name".into());
        let transport = RecordingTransport::answering(Ok(()));

        let outcome = block_on(session.submit(&transport));

        assert_eq!(outcome, Err(SubmitRejected::Incomplete(ContactField::Email)));
        assert!(transport.sent.borrow().is_empty());
        assert_eq!(session.form().status(), &SubmitStatus::Idle);
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let (session, _) = counting_session();
        fill(&session);
        let (transport, gate) = gated();

        block_on(async {
            let first = session.submit(&transport);
            futures::pin_mut!(first);
            assert!(futures::poll!(first.as_mut()).is_pending());
            assert!(session.form().is_sending());

            let second = session.submit(&transport).await;
            assert_eq!(second, Err(SubmitRejected::AlreadySending));
            assert_eq!(transport.calls.get(), 1);

            gate.send(Ok(())).unwrap();
            assert_eq!(first.await, Ok(SubmitOutcome::Delivered));
        });
        assert_eq!(session.form().status(), &SubmitStatus::Sent);
    }

    #[test]
    fn result_after_detach_is_discarded() {
        let (session, renders) = counting_session();
        fill(&session);
        let (transport, gate) = gated();

        block_on(async {
            let pending = session.submit(&transport);
            futures::pin_mut!(pending);
            assert!(futures::poll!(pending.as_mut()).is_pending());

            session.detach();
            let renders_at_detach = renders.get();
            gate.send(Ok(())).unwrap();

            assert_eq!(pending.await, Ok(SubmitOutcome::Abandoned));
            assert_eq!(renders.get(), renders_at_detach);
        });
        assert!(!session.form().draft().is_empty());
    }
}
