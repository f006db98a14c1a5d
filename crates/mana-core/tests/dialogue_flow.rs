//! End-to-end dialogue tests against mock transport and submission
//! collaborators.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mana_core::Result;
use mana_core::catalog::Catalog;
use mana_core::dialogue::{DialogueController, Reply, Responder};
use mana_core::session::ChatId;
use mana_core::submit::{AllocationSubmitter, SubmissionReport};

/// Records every reply the controller emits.
#[derive(Default)]
struct RecordingResponder {
    sent: Mutex<Vec<(ChatId, Reply)>>,
}

impl RecordingResponder {
    fn texts(&self, chat: ChatId) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == chat)
            .map(|(_, reply)| reply.text.clone())
            .collect()
    }

    fn last_text(&self, chat: ChatId) -> String {
        self.texts(chat).last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn send(&self, chat: ChatId, reply: Reply) -> Result<()> {
        self.sent.lock().unwrap().push((chat, reply));
        Ok(())
    }
}

/// Records submitted batches and reports a configured number of failures.
#[derive(Default)]
struct MockSubmitter {
    calls: Mutex<Vec<(String, BTreeMap<String, u8>)>>,
    failures: usize,
}

impl MockSubmitter {
    fn failing(failures: usize) -> Self {
        Self {
            failures,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<(String, BTreeMap<String, u8>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AllocationSubmitter for MockSubmitter {
    async fn submit(&self, employee: &str, allocations: &BTreeMap<String, u8>) -> SubmissionReport {
        self.calls
            .lock()
            .unwrap()
            .push((employee.to_string(), allocations.clone()));

        let failed = self.failures.min(allocations.len());
        SubmissionReport {
            succeeded: allocations.len() - failed,
            failed,
        }
    }
}

fn controller(
    submitter: Arc<MockSubmitter>,
    responder: Arc<RecordingResponder>,
) -> DialogueController {
    DialogueController::new(Arc::new(Catalog::default()), submitter, responder)
}

const CHAT: ChatId = 100;

#[tokio::test]
async fn full_dialogue_submits_and_resets() {
    let submitter = Arc::new(MockSubmitter::default());
    let responder = Arc::new(RecordingResponder::default());
    let controller = controller(submitter.clone(), responder.clone());

    controller.handle_start(CHAT).await.unwrap();
    controller.handle_text(CHAT, "Голикова Ксения").await.unwrap();
    controller.handle_text(CHAT, "Chad - 10").await.unwrap();

    let calls = submitter.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "Голикова Ксения");
    assert_eq!(calls[0].1.get("Chad"), Some(&10));

    let texts = responder.texts(CHAT);
    assert!(texts[0].contains("Привет"));
    assert!(texts[1].contains("Спасибо, Голикова Ксения"));
    assert!(texts[2].contains("Заполняю форму"));
    assert!(texts[3].contains("Успешно заполнена 1 форм!"));

    // Session is gone: the next text is treated as an employee name again
    controller.handle_text(CHAT, "Chad - 5").await.unwrap();
    assert!(responder.last_text(CHAT).contains("не найден в списке"));
    assert_eq!(submitter.calls().len(), 1);
}

#[tokio::test]
async fn unknown_employee_keeps_the_phase() {
    let submitter = Arc::new(MockSubmitter::default());
    let responder = Arc::new(RecordingResponder::default());
    let controller = controller(submitter.clone(), responder.clone());

    controller.handle_text(CHAT, "Смирнов Иван").await.unwrap();
    assert!(responder.last_text(CHAT).contains("Сотрудник 'Смирнов Иван' не найден"));

    // Retry with a valid name goes through
    controller.handle_text(CHAT, "Кузнецов Иван").await.unwrap();
    assert!(responder.last_text(CHAT).contains("Спасибо, Кузнецов Иван"));
}

#[tokio::test]
async fn over_budget_batch_is_not_submitted() {
    let submitter = Arc::new(MockSubmitter::default());
    let responder = Arc::new(RecordingResponder::default());
    let controller = controller(submitter.clone(), responder.clone());

    controller.handle_text(CHAT, "Кузнецов Иван").await.unwrap();
    controller
        .handle_text(CHAT, "ВТБ / SMM - 5, АК Барс / SMM - 6")
        .await
        .unwrap();

    assert!(responder.last_text(CHAT).contains("Сумма баллов = 11"));
    assert!(submitter.calls().is_empty());

    // Phase preserved: a corrected batch still submits
    controller
        .handle_text(CHAT, "ВТБ / SMM - 5, АК Барс / SMM - 5")
        .await
        .unwrap();
    assert_eq!(submitter.calls().len(), 1);
}

#[tokio::test]
async fn pair_errors_block_submission() {
    let submitter = Arc::new(MockSubmitter::default());
    let responder = Arc::new(RecordingResponder::default());
    let controller = controller(submitter.clone(), responder.clone());

    controller.handle_text(CHAT, "Кузнецов Иван").await.unwrap();
    controller
        .handle_text(CHAT, "ВТБ / SMM - 5, РБИ / SMM - 3")
        .await
        .unwrap();

    assert!(responder.last_text(CHAT).contains("Проект 'РБИ / SMM' не найден"));
    assert!(submitter.calls().is_empty());
}

#[tokio::test]
async fn garbage_text_reports_the_format() {
    let submitter = Arc::new(MockSubmitter::default());
    let responder = Arc::new(RecordingResponder::default());
    let controller = controller(submitter.clone(), responder.clone());

    controller.handle_text(CHAT, "Кузнецов Иван").await.unwrap();
    controller.handle_text(CHAT, "просто текст без оценок").await.unwrap();

    assert!(responder.last_text(CHAT).contains("Неверный формат"));
    assert!(submitter.calls().is_empty());

    // Still collecting allocations
    controller.handle_text(CHAT, "Chad - 2").await.unwrap();
    assert_eq!(submitter.calls().len(), 1);
}

#[tokio::test]
async fn partial_failure_reports_the_tally() {
    let submitter = Arc::new(MockSubmitter::failing(1));
    let responder = Arc::new(RecordingResponder::default());
    let controller = controller(submitter.clone(), responder.clone());

    controller.handle_text(CHAT, "Кузнецов Иван").await.unwrap();
    controller
        .handle_text(CHAT, "ВТБ / SMM - 5, Chad - 3")
        .await
        .unwrap();

    let last = responder.last_text(CHAT);
    assert!(last.contains("✅ Успешно: 1"));
    assert!(last.contains("❌ Ошибок: 1"));
    assert!(last.contains("администратором"));

    // Session destroyed even after a partial failure
    controller.handle_text(CHAT, "Chad - 5").await.unwrap();
    assert!(responder.last_text(CHAT).contains("не найден в списке"));
}

#[tokio::test]
async fn cancel_without_a_session_is_a_noop() {
    let submitter = Arc::new(MockSubmitter::default());
    let responder = Arc::new(RecordingResponder::default());
    let controller = controller(submitter, responder.clone());

    controller.handle_cancel(CHAT).await.unwrap();
    assert!(responder.last_text(CHAT).contains("Отменено"));
}

#[tokio::test]
async fn cancel_drops_an_in_progress_session() {
    let submitter = Arc::new(MockSubmitter::default());
    let responder = Arc::new(RecordingResponder::default());
    let controller = controller(submitter.clone(), responder.clone());

    controller.handle_text(CHAT, "Кузнецов Иван").await.unwrap();
    controller.handle_cancel(CHAT).await.unwrap();

    // Back to the first phase: text is an employee name again
    controller.handle_text(CHAT, "Chad - 5").await.unwrap();
    assert!(responder.last_text(CHAT).contains("не найден в списке"));
    assert!(submitter.calls().is_empty());
}

#[tokio::test]
async fn start_resets_a_session_mid_dialogue() {
    let submitter = Arc::new(MockSubmitter::default());
    let responder = Arc::new(RecordingResponder::default());
    let controller = controller(submitter.clone(), responder.clone());

    controller.handle_text(CHAT, "Кузнецов Иван").await.unwrap();
    controller.handle_start(CHAT).await.unwrap();

    // The allocation phase was dropped with the old session
    controller.handle_text(CHAT, "Chad - 5").await.unwrap();
    assert!(responder.last_text(CHAT).contains("не найден в списке"));
}

#[tokio::test]
async fn sessions_do_not_leak_between_chats() {
    let submitter = Arc::new(MockSubmitter::default());
    let responder = Arc::new(RecordingResponder::default());
    let controller = controller(submitter.clone(), responder.clone());

    controller.handle_text(1, "Кузнецов Иван").await.unwrap();
    controller.handle_text(2, "Кузнецов Иван").await.unwrap();

    controller.handle_cancel(1).await.unwrap();

    // Chat 2 is still collecting allocations
    controller.handle_text(2, "Chad - 4").await.unwrap();
    assert_eq!(submitter.calls().len(), 1);
    assert!(responder.last_text(2).contains("Успешно"));
}
