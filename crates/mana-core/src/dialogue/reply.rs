//! Outbound reply texts.
//!
//! Every user-facing message lives here, including the wording the bot has
//! always used. Messages that rely on `<b>` emphasis are flagged so the
//! transport can enable HTML parsing for them only.

use std::collections::BTreeMap;

use crate::allocation::{PairError, PairErrorKind};
use crate::submit::SubmissionReport;

/// One outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// True when the text uses HTML markup for emphasis.
    pub html: bool,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: false,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: true,
        }
    }
}

/// `/start` greeting, asking for the employee name.
pub fn greeting() -> Reply {
    Reply::plain(
        "👋 Привет! Я помогу тебе быстро заполнить форму Маны!\n\n\
         Напиши свое имя и фамилию (как в списке сотрудников):",
    )
}

/// `/help` usage text.
pub fn help_text() -> Reply {
    Reply::html(
        "📖 <b>Как использовать бота:</b>\n\n\
         1️⃣ Напиши /start\n\
         2️⃣ Укажи свое имя и фамилию\n\
         3️⃣ Напиши проекты и баллы в формате:\n   \
         <b>Проект1 - балл, Проект2 - балл</b>\n\n\
         4️⃣ Бот автоматически заполнит форму!\n\n\
         ⚠️ <b>Важно:</b>\n\
         • Сумма баллов не может быть больше 10\n\
         • Баллы от 1 до 10\n\
         • Названия проектов должны совпадать с формой",
    )
}

/// The typed name is not in the employee list.
pub fn unknown_employee(name: &str) -> Reply {
    Reply::plain(format!(
        "❌ Сотрудник '{name}' не найден в списке.\n\n\
         Пожалуйста, напиши имя точно так, как оно указано в форме.\n\
         Попробуй еще раз:"
    ))
}

/// Employee accepted; explain the allocation format.
pub fn allocations_prompt(employee: &str) -> Reply {
    Reply::html(format!(
        "✅ Спасибо, {employee}!\n\n\
         Теперь напиши свои проекты и оценки в формате:\n\
         <b>Проект1 - балл, Проект2 - балл, Проект3 - балл</b>\n\n\
         Например:\n\
         <b>ВТБ / SMM - 5, РБИ / SMM - 3, СберОбразование - 2</b>\n\n\
         Баллы: от 1 до 10\n\
         Сумма всех баллов не может быть больше 10!"
    ))
}

/// No `project - score` clause could be extracted from the message.
pub fn invalid_format() -> Reply {
    Reply::html(
        "❌ Неверный формат!\n\n\
         Используй формат:\n\
         <b>Проект1 - балл, Проект2 - балл</b>\n\n\
         Пример:\n\
         <b>ВТБ / SMM - 5, РБИ / SMM - 3</b>",
    )
}

/// The batch total exceeds the budget.
pub fn over_budget(total: i64) -> Reply {
    Reply::plain(format!(
        "❌ Сумма баллов = {total}, а максимум = 10!\n\n\
         Пожалуйста, перераспредели баллы так, чтобы сумма была ≤ 10."
    ))
}

/// One line per rejected pair, then a retry hint.
pub fn pair_errors(errors: &[PairError]) -> Reply {
    let lines: Vec<String> = errors
        .iter()
        .map(|error| match error.kind {
            PairErrorKind::ScoreOutOfRange => {
                format!("❌ '{}': балл должен быть от 1 до 10", error.project)
            }
            PairErrorKind::NonNumericScore => {
                format!("❌ '{}': некорректный балл", error.project)
            }
            PairErrorKind::UnknownProject => {
                format!("❌ Проект '{}' не найден в списке", error.project)
            }
        })
        .collect();

    Reply::plain(format!(
        "{}\n\nПроверь названия проектов и попробуй еще раз.",
        lines.join("\n")
    ))
}

/// Clauses parsed but none survived validation.
pub fn none_parsed() -> Reply {
    Reply::plain(
        "❌ Не удалось распарсить ни один проект.\n\
         Попробуй еще раз.",
    )
}

/// Summary shown right before the form is filled.
pub fn confirmation(employee: &str, allocations: &BTreeMap<String, u8>, total: u8) -> Reply {
    let projects: Vec<String> = allocations
        .iter()
        .map(|(project, score)| format!("• {project}: {score} баллов"))
        .collect();

    Reply::html(format!(
        "📋 Твои данные:\n\n\
         <b>Сотрудник:</b> {employee}\n\n\
         <b>Проекты:</b>\n{}\n\n\
         <b>Сумма баллов:</b> {total}/10\n\n\
         ⏳ Заполняю форму...",
        projects.join("\n")
    ))
}

/// Every record went through.
pub fn all_submitted(count: usize) -> Reply {
    let suffix = if count != 1 { "ы" } else { "" };
    Reply::plain(format!(
        "✅ Отлично! Успешно заполнена {count} форм{suffix}!\n\n\
         Сэкономил тебе около 5-10 минут работы 🎉\n\n\
         Спасибо, что используешь бота!\n\
         /start - для новой заявки"
    ))
}

/// Some records failed; show the tally and where to escalate.
pub fn partially_submitted(report: SubmissionReport) -> Reply {
    Reply::plain(format!(
        "⚠️ Результат:\n\
         ✅ Успешно: {}\n\
         ❌ Ошибок: {}\n\n\
         Свяжись с администратором, если что-то пошло не так.\n\
         /start - для новой заявки",
        report.succeeded, report.failed
    ))
}

/// `/cancel` acknowledgement.
pub fn cancelled() -> Reply {
    Reply::plain(
        "❌ Отменено.\n\
         /start - для начала заново",
    )
}
