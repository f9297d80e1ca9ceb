use thiserror::Error;

#[derive(Debug, Error)]
pub enum BaziError {
    #[error("not initialized: run 'bazi init'")]
    NotInitialized,

    #[error("invalid stem '{0}': expected one of 甲乙丙丁戊己庚辛壬癸 or its pinyin")]
    InvalidStem(String),

    #[error("invalid branch '{0}': expected one of 子丑寅卯辰巳午未申酉戌亥 or its pinyin")]
    InvalidBranch(String),

    #[error("invalid element: {0}")]
    InvalidElement(String),

    #[error("{stem}{branch} is not a sexagenary pillar: stem and branch polarity differ")]
    MismatchedPolarity { stem: String, branch: String },

    #[error("invalid pillar '{0}': expected a stem followed by a branch, e.g. 甲子 or jia-zi")]
    InvalidPillar(String),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("invalid tier '{0}': expected advance, engage, observe or withdraw")]
    InvalidTier(String),

    #[error("invalid filter '{0}': expected a tier or one of authority, resource, wealth")]
    InvalidFilter(String),

    #[error("invalid chart: {0}")]
    InvalidChart(String),

    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    #[error("invalid profile name '{0}': must not be blank")]
    InvalidProfileName(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BaziError>;
