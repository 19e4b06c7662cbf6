//! Student record entity and its fixed attribute domains

use serde::{Deserialize, Serialize};

use super::validation::{validate_record, StudentValidationError};

/// A categorical attribute whose values are a fixed list of wire literals
pub trait LiteralOption: Sized + Copy + 'static {
    /// Every value of the domain, in form order
    const ALL: &'static [Self];

    /// The wire literal for this value
    fn as_str(&self) -> &'static str;

    /// Looks up the value whose literal matches `literal` exactly
    fn from_literal(literal: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == literal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl LiteralOption for Gender {
    const ALL: &'static [Self] = &[Self::Male, Self::Female];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

/// Geographical region of the student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "East Anglian Region")]
    EastAnglian,
    #[serde(rename = "London Region")]
    London,
    #[serde(rename = "North Region")]
    North,
    #[serde(rename = "South Region")]
    South,
    #[serde(rename = "Scotland")]
    Scotland,
    #[serde(rename = "Wales")]
    Wales,
    #[serde(rename = "Ireland")]
    Ireland,
    #[serde(rename = "North Western Region")]
    NorthWestern,
    #[serde(rename = "South East Region")]
    SouthEast,
    #[serde(rename = "West Midlands Region")]
    WestMidlands,
    #[serde(rename = "South West Region")]
    SouthWest,
    #[serde(rename = "Yorkshire Region")]
    Yorkshire,
    #[serde(rename = "East Midlands Region")]
    EastMidlands,
}

impl LiteralOption for Region {
    const ALL: &'static [Self] = &[
        Self::EastAnglian,
        Self::London,
        Self::North,
        Self::South,
        Self::Scotland,
        Self::Wales,
        Self::Ireland,
        Self::NorthWestern,
        Self::SouthEast,
        Self::WestMidlands,
        Self::SouthWest,
        Self::Yorkshire,
        Self::EastMidlands,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::EastAnglian => "East Anglian Region",
            Self::London => "London Region",
            Self::North => "North Region",
            Self::South => "South Region",
            Self::Scotland => "Scotland",
            Self::Wales => "Wales",
            Self::Ireland => "Ireland",
            Self::NorthWestern => "North Western Region",
            Self::SouthEast => "South East Region",
            Self::WestMidlands => "West Midlands Region",
            Self::SouthWest => "South West Region",
            Self::Yorkshire => "Yorkshire Region",
            Self::EastMidlands => "East Midlands Region",
        }
    }
}

/// Highest education level, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HighestEducation {
    #[serde(rename = "No Formal quals")]
    NoFormalQuals,
    #[serde(rename = "Lower Than A Level")]
    LowerThanALevel,
    #[serde(rename = "A Level or Equivalent")]
    ALevelOrEquivalent,
    #[serde(rename = "HE Qualification")]
    HeQualification,
    #[serde(rename = "Post Graduate Qualification")]
    PostGraduate,
}

impl LiteralOption for HighestEducation {
    const ALL: &'static [Self] = &[
        Self::NoFormalQuals,
        Self::LowerThanALevel,
        Self::ALevelOrEquivalent,
        Self::HeQualification,
        Self::PostGraduate,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::NoFormalQuals => "No Formal quals",
            Self::LowerThanALevel => "Lower Than A Level",
            Self::ALevelOrEquivalent => "A Level or Equivalent",
            Self::HeQualification => "HE Qualification",
            Self::PostGraduate => "Post Graduate Qualification",
        }
    }
}

/// Index of Multiple Deprivation decile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImdBand {
    #[serde(rename = "0-10%")]
    Decile0To10,
    #[serde(rename = "10-20%")]
    Decile10To20,
    #[serde(rename = "20-30%")]
    Decile20To30,
    #[serde(rename = "30-40%")]
    Decile30To40,
    #[serde(rename = "40-50%")]
    Decile40To50,
    #[serde(rename = "50-60%")]
    Decile50To60,
    #[serde(rename = "60-70%")]
    Decile60To70,
    #[serde(rename = "70-80%")]
    Decile70To80,
    #[serde(rename = "80-90%")]
    Decile80To90,
    #[serde(rename = "90-100%")]
    Decile90To100,
}

impl LiteralOption for ImdBand {
    const ALL: &'static [Self] = &[
        Self::Decile0To10,
        Self::Decile10To20,
        Self::Decile20To30,
        Self::Decile30To40,
        Self::Decile40To50,
        Self::Decile50To60,
        Self::Decile60To70,
        Self::Decile70To80,
        Self::Decile80To90,
        Self::Decile90To100,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Decile0To10 => "0-10%",
            Self::Decile10To20 => "10-20%",
            Self::Decile20To30 => "20-30%",
            Self::Decile30To40 => "30-40%",
            Self::Decile40To50 => "40-50%",
            Self::Decile50To60 => "50-60%",
            Self::Decile60To70 => "60-70%",
            Self::Decile70To80 => "70-80%",
            Self::Decile80To90 => "80-90%",
            Self::Decile90To100 => "90-100%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "0-35")]
    UpTo35,
    #[serde(rename = "35-55")]
    From35To55,
    #[serde(rename = "55<=")]
    Over55,
}

impl LiteralOption for AgeBand {
    const ALL: &'static [Self] = &[Self::UpTo35, Self::From35To55, Self::Over55];

    fn as_str(&self) -> &'static str {
        match self {
            Self::UpTo35 => "0-35",
            Self::From35To55 => "35-55",
            Self::Over55 => "55<=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Disability {
    #[default]
    #[serde(rename = "N")]
    No,
    #[serde(rename = "Y")]
    Yes,
}

impl LiteralOption for Disability {
    const ALL: &'static [Self] = &[Self::No, Self::Yes];

    fn as_str(&self) -> &'static str {
        match self {
            Self::No => "N",
            Self::Yes => "Y",
        }
    }
}

/// Allowed values for `studied_credits`: 30 to 360 in steps of 30
pub const CREDIT_LADDER: [i64; 12] = [30, 60, 90, 120, 150, 180, 210, 240, 270, 300, 330, 360];

/// A complete student record as submitted to the classification service.
///
/// Numeric fields are deliberately not range-checked on construction; see
/// [`StudentRecord::validate`] for the advisory range check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub gender: Gender,
    pub region: Region,
    pub highest_education: HighestEducation,
    pub imd_band: ImdBand,
    pub age_band: AgeBand,
    pub num_of_prev_attempts: i64,
    pub studied_credits: i64,
    pub disability: Disability,
    pub avg_score: f64,
    pub num_assessments: i64,
}

impl StudentRecord {
    /// The example input documented by the classification service
    pub fn example() -> Self {
        Self {
            gender: Gender::Male,
            region: Region::EastAnglian,
            highest_education: HighestEducation::HeQualification,
            imd_band: ImdBand::Decile90To100,
            age_band: AgeBand::From35To55,
            num_of_prev_attempts: 0,
            studied_credits: 240,
            disability: Disability::No,
            avg_score: 75.5,
            num_assessments: 5,
        }
    }

    /// Checks every numeric field against its closed range
    pub fn validate(&self) -> Result<(), Vec<StudentValidationError>> {
        validate_record(self)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

macro_rules! impl_display_from_str {
    ($($ty:ty => $field:literal),* $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl std::str::FromStr for $ty {
                type Err = super::form::FormError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::from_literal(s).ok_or_else(|| super::form::FormError::UnknownOption {
                        field: $field.to_string(),
                        value: s.to_string(),
                    })
                }
            }
        )*
    };
}

impl_display_from_str! {
    Gender => "gender",
    Region => "region",
    HighestEducation => "highest_education",
    ImdBand => "imd_band",
    AgeBand => "age_band",
    Disability => "disability",
}
