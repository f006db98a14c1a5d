//! Reference catalogs of employees and projects.
//!
//! The Google Form only accepts answers that match its option lists
//! verbatim, so membership checks are exact and case-sensitive.

use std::collections::HashSet;

/// Project options copied from the form.
pub const PROJECTS: &[&str] = &[
    "NewBiz (тендеры)",
    "NewBiz (агентское промо/смм)",
    "Прочее (то, что не относится к конкретному проекту / база знаний)",
    "HR (найм, онбординг сотрудника и пр.)",
    "А деньги / SMM",
    "А деньги / Perf",
    "Академия ИИ / SMM",
    "Академия ИИ / Perf",
    "АК Барс / SMM",
    "АК Барс / Perf",
    "ВТБ / SMM",
    "ВТБ / Perf",
    "ВТБ ИХ / Perf",
    "ЛСР / SMM",
    "ЛСР / Perf",
    "СберОбразование",
    "Страна / SMM",
    "Страна / Perf",
    "Центр-инвест / SMM",
    "Центр-Инвест / Perf",
    "Школа Мосбиржи / SMM",
    "Школа Мосбиржи / Perf",
    "RBI / SMM",
    "RBI / Perf",
    "Chad",
    "Posters",
    "Icloud",
    "A&K",
    "Азбука Аттикус",
    "Ренессанс",
    "Аспектум",
];

/// Employee options copied from the form.
pub const EMPLOYEES: &[&str] = &[
    "Голикова Ксения",
    "Казакова Мария",
    "Павлова Валерия",
    "Рябцева Александра",
    "Шабловская Екатерина",
    "Степанова Юлия",
    "Куминова Мария",
    "Гмырак Алексей",
    "Маринина Анастасия",
    "Ракчеева Ксения",
    "Чистяков Кирилл",
    "Шарапова Мария",
    "Швецов Денис",
    "Даниленко Павел",
    "Дюкова Мария",
    "Заколпская София",
    "Игнатович Ксения",
    "Исаков Никита",
    "Кириллова Варвара",
    "Коханова Татьяна",
    "Липатова Екатерина",
    "Трохинова Марина",
    "Трусова Вероника",
    "Хрулёв Роман",
    "Бударова Анастасия",
    "Иванов Александр",
    "Кузнецов Иван",
    "Наумычев Вячеслав",
    "Пичейкин Антоний",
    "Текучева Мария",
    "Толкачева Валерия",
    "Федосеенко Лина",
    "Ткаленко Евгений",
    "Сарычева Елизавета",
    "Кононенко Кристина",
    "Чуйко Юлия",
    "Шишлякова Алёна",
];

/// Immutable lookup lists loaded at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    employees: HashSet<String>,
    projects: HashSet<String>,
}

impl Catalog {
    /// Builds a catalog from arbitrary lists. Used by tests and by callers
    /// that load the lists from elsewhere.
    pub fn new<E, P>(employees: E, projects: P) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            employees: employees.into_iter().map(Into::into).collect(),
            projects: projects.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact-match membership check against the employee list.
    pub fn is_valid_employee(&self, name: &str) -> bool {
        self.employees.contains(name)
    }

    /// Exact-match membership check against the project list.
    pub fn is_valid_project(&self, name: &str) -> bool {
        self.projects.contains(name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(EMPLOYEES.iter().copied(), PROJECTS.iter().copied())
    }
}
