pub mod dataset;
pub mod domain;
pub mod frequency;
pub mod report;

pub use dataset::{DatasetError, DatasetFetcher, SkillDataset};
pub use domain::{ChartKind, Selection, Vacancy, VacancyCategory};
pub use frequency::{SkillFrequencies, SkillRank, DEFAULT_TOP_SKILLS};
pub use report::ChartSpec;
