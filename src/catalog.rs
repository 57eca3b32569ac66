//! Attribute catalog: the allow-list of field names rules may reference
//!
//! Built once at process start and shared read-only; the engine only ever
//! runs membership tests against it.

use crate::error::{Result, RuleEngineError};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Field names admitted by the default catalog
pub const DEFAULT_ATTRIBUTES: [&str; 99] = [
    "age",
    "department",
    "income",
    "spend",
    "salary",
    "experience",
    "position",
    "location",
    "education",
    "maritalStatus",
    "gender",
    "employmentType",
    "creditScore",
    "loanAmount",
    "loanType",
    "employmentStatus",
    "children",
    "dependentCount",
    "vehicleType",
    "propertyOwnership",
    "annualIncome",
    "monthlyExpense",
    "savings",
    "taxBracket",
    "healthInsurance",
    "lifeInsurance",
    "disabilityInsurance",
    "investments",
    "retirementFund",
    "bonus",
    "jobLevel",
    "promotionHistory",
    "projectCount",
    "certifications",
    "languages",
    "workHoursPerWeek",
    "vacationDays",
    "performanceRating",
    "disciplinaryActions",
    "companyTenure",
    "contractLength",
    "jobSatisfaction",
    "customerFeedback",
    "revenueGenerated",
    "salesTargetAchieved",
    "attendance",
    "remoteWorkPercentage",
    "overtimeHours",
    "stockOptions",
    "volunteerHours",
    "innovationScore",
    "trainingHours",
    "commuteTime",
    "teamSize",
    "managerFeedback",
    "careerProgression",
    "leadershipPotential",
    "skillsAssessment",
    "projectDeadlineMet",
    "clientSatisfaction",
    "stressLevel",
    "riskTolerance",
    "financialLiabilities",
    "mortgagePayments",
    "rentPayments",
    "utilityExpenses",
    "childcareCosts",
    "tuitionFees",
    "otherDebts",
    "partnerIncome",
    "familySupport",
    "investmentReturns",
    "annualBonus",
    "commissionEarned",
    "travelExpenses",
    "housingAllowance",
    "relocationAllowance",
    "internetUsage",
    "digitalSkills",
    "socialMediaEngagement",
    "networkingEventsAttended",
    "professionalAffiliations",
    "workplaceAccidents",
    "wellnessProgramParticipation",
    "mentalHealthSupport",
    "physicalActivityLevel",
    "dietaryHabits",
    "smokingStatus",
    "alcoholConsumption",
    "legalIssues",
    "immigrationStatus",
    "visaType",
    "citizenshipStatus",
    "retirementEligibility",
    "pensionPlan",
    "profitSharing",
    "severancePay",
    "unemploymentBenefits",
    "grade",
];

/// Immutable set of attribute names rules may reference
///
/// Serializes as a plain array of names so a deployment can ship its
/// catalog as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AttributeCatalog {
    names: AHashSet<String>,
}

impl AttributeCatalog {
    /// Build a catalog from an explicit list of names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Membership test
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Error unless `name` is in the catalog
    pub fn validate_attribute(&self, name: &str) -> Result<()> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(RuleEngineError::UnknownAttribute(name.to_string()))
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for AttributeCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTES)
    }
}

impl From<Vec<String>> for AttributeCatalog {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<AttributeCatalog> for Vec<String> {
    fn from(catalog: AttributeCatalog) -> Self {
        let mut names: Vec<String> = catalog.names.into_iter().collect();
        names.sort();
        names
    }
}
