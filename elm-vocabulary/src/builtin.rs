//! Built-in ELM vocabularies, embedded at compile time.

use tracing::debug;

use crate::error::Result;
use crate::types::ControlledVocabulary;

/// The controlled vocabularies shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    AssessmentType,
    LearningActivityType,
    LearningOpportunityType,
    LearningScheduleType,
    LearningSettingType,
    ModeOfLearningAndAssessment,
}

impl Builtin {
    /// Every built-in vocabulary, in declaration order.
    pub const ALL: [Builtin; 6] = [
        Builtin::AssessmentType,
        Builtin::LearningActivityType,
        Builtin::LearningOpportunityType,
        Builtin::LearningScheduleType,
        Builtin::LearningSettingType,
        Builtin::ModeOfLearningAndAssessment,
    ];

    /// The vocabulary id declared by the embedded document.
    pub fn id(self) -> &'static str {
        match self {
            Builtin::AssessmentType => "assessment",
            Builtin::LearningActivityType => "learning_activity",
            Builtin::LearningOpportunityType => "learning_opportunity",
            Builtin::LearningScheduleType => "learning_schedule",
            Builtin::LearningSettingType => "learning_setting",
            Builtin::ModeOfLearningAndAssessment => "learning_assessment",
        }
    }

    /// Raw YAML source of the vocabulary.
    pub fn source(self) -> &'static str {
        match self {
            Builtin::AssessmentType => include_str!("../data/assessment.yaml"),
            Builtin::LearningActivityType => include_str!("../data/learning_activity.yaml"),
            Builtin::LearningOpportunityType => include_str!("../data/learning_opportunity.yaml"),
            Builtin::LearningScheduleType => include_str!("../data/learning_schedule.yaml"),
            Builtin::LearningSettingType => include_str!("../data/learning_setting.yaml"),
            Builtin::ModeOfLearningAndAssessment => include_str!("../data/learning_assessment.yaml"),
        }
    }

    /// Parse the embedded document.
    pub fn load(self) -> Result<ControlledVocabulary> {
        let vocabulary = ControlledVocabulary::from_yaml(self.source())?;
        debug!(id = %vocabulary.id(), "loaded built-in vocabulary");
        Ok(vocabulary)
    }

    /// Look a built-in up by its id.
    pub fn from_id(id: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|builtin| builtin.id() == id)
    }
}
