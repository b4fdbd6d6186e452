//! Domain objects: narrative threat-intelligence content
//!
//! All kinds in this module use [`DomainProperties`]: random identity and
//! `created`/`modified` timestamps stamped at construction. Constructors
//! take the kind's required data plus [`CommonOptions`] for the optional
//! common fields, and fail with `Error::PropertyMissing` when a required
//! property is empty.
//!
//! Per-kind field schemas are deliberately small: enough to carry the
//! required-field contract and the usual narrative fields.

use crate::common::{require_non_empty, CommonOptions, DomainProperties};
use serde::{Deserialize, Serialize};
use stix2_core::{Error, Identifier, KillChainPhase, Result, Timestamp};

/// A way adversaries attempt to compromise targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackPattern {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the attack pattern
    pub name: String,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Alternative names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    /// Kill-chain phases this pattern appears in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_chain_phases: Option<Vec<KillChainPhase>>,
}

impl AttackPattern {
    /// Create an attack pattern; `name` is required
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_options(name, CommonOptions::new())
    }

    /// Create an attack pattern with optional common fields
    pub fn with_options(name: impl Into<String>, options: CommonOptions) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        Ok(AttackPattern {
            base: DomainProperties::new(Self::TYPE, &options),
            name,
            description: None,
            aliases: None,
            kill_chain_phases: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        if let Some(phases) = &self.kill_chain_phases {
            for phase in phases {
                phase.validate()?;
            }
        }
        Ok(())
    }
}

impl_domain_object!(AttackPattern, AttackPattern);

/// A grouping of adversarial behavior over time against specific targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the campaign
    pub name: String,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Alternative names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    /// When the campaign was first seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<Timestamp>,
    /// When the campaign was last seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<Timestamp>,
    /// The campaign's primary goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
}

impl Campaign {
    /// Create a campaign; `name` is required
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_options(name, CommonOptions::new())
    }

    /// Create a campaign with optional common fields
    pub fn with_options(name: impl Into<String>, options: CommonOptions) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        Ok(Campaign {
            base: DomainProperties::new(Self::TYPE, &options),
            name,
            description: None,
            aliases: None,
            first_seen: None,
            last_seen: None,
            objective: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)
    }
}

impl_domain_object!(Campaign, Campaign);

/// An action taken to prevent or respond to an attack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOfAction {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the course of action
    pub name: String,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CourseOfAction {
    /// Create a course of action; `name` is required
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_options(name, CommonOptions::new())
    }

    /// Create a course of action with optional common fields
    pub fn with_options(name: impl Into<String>, options: CommonOptions) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        Ok(CourseOfAction {
            base: DomainProperties::new(Self::TYPE, &options),
            name,
            description: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)
    }
}

impl_domain_object!(CourseOfAction, CourseOfAction);

/// An assertion that referenced objects share a context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grouping {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Short descriptor of the shared context
    pub context: String,
    /// The objects that share the context
    pub object_refs: Vec<Identifier>,
    /// Name of the grouping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Grouping {
    /// Create a grouping; `context` and a non-empty `object_refs` are required
    pub fn new(context: impl Into<String>, object_refs: Vec<Identifier>) -> Result<Self> {
        Self::with_options(context, object_refs, CommonOptions::new())
    }

    /// Create a grouping with optional common fields
    pub fn with_options(
        context: impl Into<String>,
        object_refs: Vec<Identifier>,
        options: CommonOptions,
    ) -> Result<Self> {
        let context = context.into();
        require_non_empty("context", &context)?;
        if object_refs.is_empty() {
            return Err(Error::PropertyMissing("object_refs"));
        }
        Ok(Grouping {
            base: DomainProperties::new(Self::TYPE, &options),
            context,
            object_refs,
            name: None,
            description: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("context", &self.context)?;
        if self.object_refs.is_empty() {
            return Err(Error::PropertyMissing("object_refs"));
        }
        Ok(())
    }
}

impl_domain_object!(Grouping, Grouping);

/// An individual, organization, or group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the identity
    pub name: String,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Roles this identity performs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    /// Type of entity (individual, organization, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_class: Option<String>,
    /// Industry sectors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sectors: Option<Vec<String>>,
    /// Contact information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_information: Option<String>,
}

impl Identity {
    /// Create an identity; `name` is required
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_options(name, CommonOptions::new())
    }

    /// Create an identity with optional common fields
    pub fn with_options(name: impl Into<String>, options: CommonOptions) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        Ok(Identity {
            base: DomainProperties::new(Self::TYPE, &options),
            name,
            description: None,
            roles: None,
            identity_class: None,
            sectors: None,
            contact_information: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)
    }
}

impl_domain_object!(Identity, Identity);

/// A detection pattern for suspicious or malicious activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// The detection pattern text
    pub pattern: String,
    /// Pattern language (e.g. `stix`, `snort`, `yara`)
    pub pattern_type: String,
    /// When the indicator becomes valid
    pub valid_from: Timestamp,
    /// Name of the indicator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Open-vocabulary indicator categorization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_types: Option<Vec<String>>,
    /// When the indicator stops being valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<Timestamp>,
    /// Kill-chain phases the detected activity maps to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_chain_phases: Option<Vec<KillChainPhase>>,
}

impl Indicator {
    /// Create an indicator; `pattern`, `pattern_type`, and `valid_from` are required
    pub fn new(
        pattern: impl Into<String>,
        pattern_type: impl Into<String>,
        valid_from: Timestamp,
    ) -> Result<Self> {
        Self::with_options(pattern, pattern_type, valid_from, CommonOptions::new())
    }

    /// Create an indicator with optional common fields
    pub fn with_options(
        pattern: impl Into<String>,
        pattern_type: impl Into<String>,
        valid_from: Timestamp,
        options: CommonOptions,
    ) -> Result<Self> {
        let pattern = pattern.into();
        let pattern_type = pattern_type.into();
        require_non_empty("pattern", &pattern)?;
        require_non_empty("pattern_type", &pattern_type)?;
        Ok(Indicator {
            base: DomainProperties::new(Self::TYPE, &options),
            pattern,
            pattern_type,
            valid_from,
            name: None,
            description: None,
            indicator_types: None,
            valid_until: None,
            kill_chain_phases: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("pattern", &self.pattern)?;
        require_non_empty("pattern_type", &self.pattern_type)
    }
}

impl_domain_object!(Indicator, Indicator);

/// Systems and services adversaries or defenders operate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Infrastructure {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the infrastructure
    pub name: String,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Open-vocabulary infrastructure categorization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infrastructure_types: Option<Vec<String>>,
    /// When the infrastructure was first seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<Timestamp>,
    /// When the infrastructure was last seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<Timestamp>,
}

impl Infrastructure {
    /// Create an infrastructure object; `name` is required
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_options(name, CommonOptions::new())
    }

    /// Create an infrastructure object with optional common fields
    pub fn with_options(name: impl Into<String>, options: CommonOptions) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        Ok(Infrastructure {
            base: DomainProperties::new(Self::TYPE, &options),
            name,
            description: None,
            infrastructure_types: None,
            first_seen: None,
            last_seen: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)
    }
}

impl_domain_object!(Infrastructure, Infrastructure);

/// A grouped set of adversarial behavior and resources with common properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntrusionSet {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the intrusion set
    pub name: String,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Alternative names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    /// High-level goals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<String>>,
    /// When the set was first seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<Timestamp>,
    /// When the set was last seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<Timestamp>,
}

impl IntrusionSet {
    /// Create an intrusion set; `name` is required
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_options(name, CommonOptions::new())
    }

    /// Create an intrusion set with optional common fields
    pub fn with_options(name: impl Into<String>, options: CommonOptions) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        Ok(IntrusionSet {
            base: DomainProperties::new(Self::TYPE, &options),
            name,
            description: None,
            aliases: None,
            goals: None,
            first_seen: None,
            last_seen: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)
    }
}

impl_domain_object!(IntrusionSet, IntrusionSet);

/// A geographic location
///
/// At least one of `region`, `country`, or a latitude/longitude pair must
/// be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Region vocabulary value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Latitude in decimal degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Location {
    /// Create a location from a region vocabulary value
    pub fn new_region(region: impl Into<String>) -> Result<Self> {
        let region = region.into();
        require_non_empty("region", &region)?;
        Ok(Self::empty(Some(region), None, None, None))
    }

    /// Create a location from a country code
    pub fn new_country(country: impl Into<String>) -> Result<Self> {
        let country = country.into();
        require_non_empty("country", &country)?;
        Ok(Self::empty(None, Some(country), None, None))
    }

    /// Create a location from coordinates
    pub fn new_position(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self::empty(None, None, Some(latitude), Some(longitude)))
    }

    fn empty(
        region: Option<String>,
        country: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Location {
            base: DomainProperties::new(Self::TYPE, &CommonOptions::new()),
            name: None,
            description: None,
            region,
            country,
            latitude,
            longitude,
        }
    }

    fn validate_fields(&self) -> Result<()> {
        let has_region = self.region.as_deref().is_some_and(|s| !s.is_empty());
        let has_country = self.country.as_deref().is_some_and(|s| !s.is_empty());
        let has_position = self.latitude.is_some() && self.longitude.is_some();
        if !has_region && !has_country && !has_position {
            return Err(Error::PropertyMissing(
                "one of region, country, latitude/longitude",
            ));
        }
        Ok(())
    }
}

impl_domain_object!(Location, Location);

/// Malicious code or software
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Malware {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Whether this describes a family (true) or an instance (false)
    pub is_family: bool,
    /// Name of the malware
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Open-vocabulary malware categorization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub malware_types: Option<Vec<String>>,
    /// Alternative names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    /// Kill-chain phases the malware operates in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_chain_phases: Option<Vec<KillChainPhase>>,
}

impl Malware {
    /// Create a malware object; `is_family` is required
    pub fn new(is_family: bool) -> Result<Self> {
        Self::with_options(is_family, CommonOptions::new())
    }

    /// Create a malware object with optional common fields
    pub fn with_options(is_family: bool, options: CommonOptions) -> Result<Self> {
        Ok(Malware {
            base: DomainProperties::new(Self::TYPE, &options),
            is_family,
            name: None,
            description: None,
            malware_types: None,
            aliases: None,
            kill_chain_phases: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        // is_family is required but a bool cannot be empty; nothing further
        Ok(())
    }
}

impl_domain_object!(Malware, Malware);

/// Results of analyzing a malware instance or family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MalwareAnalysis {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the analysis tool or product
    pub product: String,
    /// Version of the analysis product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Classification result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// When the analysis started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_started: Option<Timestamp>,
    /// When the analysis ended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_ended: Option<Timestamp>,
}

impl MalwareAnalysis {
    /// Create a malware analysis; `product` is required
    pub fn new(product: impl Into<String>) -> Result<Self> {
        Self::with_options(product, CommonOptions::new())
    }

    /// Create a malware analysis with optional common fields
    pub fn with_options(product: impl Into<String>, options: CommonOptions) -> Result<Self> {
        let product = product.into();
        require_non_empty("product", &product)?;
        Ok(MalwareAnalysis {
            base: DomainProperties::new(Self::TYPE, &options),
            product,
            version: None,
            result: None,
            analysis_started: None,
            analysis_ended: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("product", &self.product)
    }
}

impl_domain_object!(MalwareAnalysis, MalwareAnalysis);

/// Analyst commentary on other objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// The note content
    pub content: String,
    /// The objects the note applies to
    pub object_refs: Vec<Identifier>,
    /// Short summary
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    /// Names of the authors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
}

impl Note {
    /// Create a note; `content` and a non-empty `object_refs` are required
    pub fn new(content: impl Into<String>, object_refs: Vec<Identifier>) -> Result<Self> {
        Self::with_options(content, object_refs, CommonOptions::new())
    }

    /// Create a note with optional common fields
    pub fn with_options(
        content: impl Into<String>,
        object_refs: Vec<Identifier>,
        options: CommonOptions,
    ) -> Result<Self> {
        let content = content.into();
        require_non_empty("content", &content)?;
        if object_refs.is_empty() {
            return Err(Error::PropertyMissing("object_refs"));
        }
        Ok(Note {
            base: DomainProperties::new(Self::TYPE, &options),
            content,
            object_refs,
            abstract_text: None,
            authors: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("content", &self.content)?;
        if self.object_refs.is_empty() {
            return Err(Error::PropertyMissing("object_refs"));
        }
        Ok(())
    }
}

impl_domain_object!(Note, Note);

/// A window in which observables were seen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedData {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Beginning of the observation window
    pub first_observed: Timestamp,
    /// End of the observation window
    pub last_observed: Timestamp,
    /// How many times the data was observed (>= 1)
    pub number_observed: u64,
    /// The observables that were seen
    pub object_refs: Vec<Identifier>,
}

impl ObservedData {
    /// Create observed data; all four properties are required
    pub fn new(
        first_observed: Timestamp,
        last_observed: Timestamp,
        number_observed: u64,
        object_refs: Vec<Identifier>,
    ) -> Result<Self> {
        let observed = ObservedData {
            base: DomainProperties::new(Self::TYPE, &CommonOptions::new()),
            first_observed,
            last_observed,
            number_observed,
            object_refs,
        };
        observed.validate_fields()?;
        Ok(observed)
    }

    fn validate_fields(&self) -> Result<()> {
        if self.number_observed == 0 {
            return Err(Error::PropertyMissing("number_observed"));
        }
        if self.object_refs.is_empty() {
            return Err(Error::PropertyMissing("object_refs"));
        }
        Ok(())
    }
}

impl_domain_object!(ObservedData, ObservedData);

/// An analyst's assessment of previously shared information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opinion {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// The opinion vocabulary value (e.g. `agree`, `disagree`)
    pub opinion: String,
    /// The objects the opinion applies to
    pub object_refs: Vec<Identifier>,
    /// Explanation of the assessment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Names of the authors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
}

impl Opinion {
    /// Create an opinion; `opinion` and a non-empty `object_refs` are required
    pub fn new(opinion: impl Into<String>, object_refs: Vec<Identifier>) -> Result<Self> {
        let opinion = opinion.into();
        require_non_empty("opinion", &opinion)?;
        if object_refs.is_empty() {
            return Err(Error::PropertyMissing("object_refs"));
        }
        Ok(Opinion {
            base: DomainProperties::new(Self::TYPE, &CommonOptions::new()),
            opinion,
            object_refs,
            explanation: None,
            authors: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("opinion", &self.opinion)?;
        if self.object_refs.is_empty() {
            return Err(Error::PropertyMissing("object_refs"));
        }
        Ok(())
    }
}

impl_domain_object!(Opinion, Opinion);

/// A collection of intelligence published as a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the report
    pub name: String,
    /// When the report was published
    pub published: Timestamp,
    /// The objects the report covers
    pub object_refs: Vec<Identifier>,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Open-vocabulary report categorization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_types: Option<Vec<String>>,
}

impl Report {
    /// Create a report; `name`, `published`, and non-empty `object_refs` are required
    pub fn new(
        name: impl Into<String>,
        published: Timestamp,
        object_refs: Vec<Identifier>,
    ) -> Result<Self> {
        Self::with_options(name, published, object_refs, CommonOptions::new())
    }

    /// Create a report with optional common fields
    pub fn with_options(
        name: impl Into<String>,
        published: Timestamp,
        object_refs: Vec<Identifier>,
        options: CommonOptions,
    ) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        if object_refs.is_empty() {
            return Err(Error::PropertyMissing("object_refs"));
        }
        Ok(Report {
            base: DomainProperties::new(Self::TYPE, &options),
            name,
            published,
            object_refs,
            description: None,
            report_types: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        if self.object_refs.is_empty() {
            return Err(Error::PropertyMissing("object_refs"));
        }
        Ok(())
    }
}

impl_domain_object!(Report, Report);

/// An actor believed to operate with malicious intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatActor {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the threat actor
    pub name: String,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Open-vocabulary actor categorization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_actor_types: Option<Vec<String>>,
    /// Alternative names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    /// Roles the actor plays
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    /// When the actor was first seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<Timestamp>,
    /// When the actor was last seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<Timestamp>,
}

impl ThreatActor {
    /// Create a threat actor; `name` is required
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_options(name, CommonOptions::new())
    }

    /// Create a threat actor with optional common fields
    pub fn with_options(name: impl Into<String>, options: CommonOptions) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        Ok(ThreatActor {
            base: DomainProperties::new(Self::TYPE, &options),
            name,
            description: None,
            threat_actor_types: None,
            aliases: None,
            roles: None,
            first_seen: None,
            last_seen: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)
    }
}

impl_domain_object!(ThreatActor, ThreatActor);

/// Legitimate software that can be used by adversaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the tool
    pub name: String,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Open-vocabulary tool categorization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_types: Option<Vec<String>>,
    /// Alternative names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    /// Version of the tool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_version: Option<String>,
    /// Kill-chain phases the tool supports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_chain_phases: Option<Vec<KillChainPhase>>,
}

impl Tool {
    /// Create a tool; `name` is required
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_options(name, CommonOptions::new())
    }

    /// Create a tool with optional common fields
    pub fn with_options(name: impl Into<String>, options: CommonOptions) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        Ok(Tool {
            base: DomainProperties::new(Self::TYPE, &options),
            name,
            description: None,
            tool_types: None,
            aliases: None,
            tool_version: None,
            kill_chain_phases: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)
    }
}

impl_domain_object!(Tool, Tool);

/// A mistake in software that can be exploited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    /// Common domain-object properties
    #[serde(flatten)]
    pub base: DomainProperties,
    /// Name of the vulnerability (e.g. a CVE id)
    pub name: String,
    /// Narrative description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Vulnerability {
    /// Create a vulnerability; `name` is required
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_options(name, CommonOptions::new())
    }

    /// Create a vulnerability with optional common fields
    pub fn with_options(name: impl Into<String>, options: CommonOptions) -> Result<Self> {
        let name = name.into();
        require_non_empty("name", &name)?;
        Ok(Vulnerability {
            base: DomainProperties::new(Self::TYPE, &options),
            name,
            description: None,
        })
    }

    fn validate_fields(&self) -> Result<()> {
        require_non_empty("name", &self.name)
    }
}

impl_domain_object!(Vulnerability, Vulnerability);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::StixObject;
    use stix2_core::ObjectType;

    #[test]
    fn test_constructors_reject_empty_required_text() {
        assert!(AttackPattern::new("").is_err());
        assert!(Campaign::new("").is_err());
        assert!(CourseOfAction::new("").is_err());
        assert!(Identity::new("").is_err());
        assert!(Infrastructure::new("").is_err());
        assert!(IntrusionSet::new("").is_err());
        assert!(MalwareAnalysis::new("").is_err());
        assert!(ThreatActor::new("").is_err());
        assert!(Tool::new("").is_err());
        assert!(Vulnerability::new("").is_err());
    }

    #[test]
    fn test_constructed_objects_carry_type_and_timestamps() {
        let pattern = AttackPattern::new("spearphishing").unwrap();
        assert_eq!(pattern.object_type(), ObjectType::AttackPattern);
        assert!(pattern.id().is_valid_for(ObjectType::AttackPattern));
        assert!(pattern.created().is_some());
        assert!(pattern.modified().is_some());
        assert!(pattern.validate().is_ok());
    }

    #[test]
    fn test_indicator_requires_pattern_fields() {
        let now = Timestamp::now();
        assert!(Indicator::new("", "stix", now).is_err());
        assert!(Indicator::new("[ipv4-addr:value = '10.0.0.1']", "", now).is_err());
        let indicator = Indicator::new("[ipv4-addr:value = '10.0.0.1']", "stix", now).unwrap();
        assert_eq!(indicator.valid_from, now);
        assert!(indicator.validate().is_ok());
    }

    #[test]
    fn test_malware_is_family_is_sufficient() {
        let malware = Malware::new(true).unwrap();
        assert!(malware.name.is_none());
        assert!(malware.validate().is_ok());
    }

    #[test]
    fn test_malware_with_options_sets_common_fields() {
        let options = CommonOptions::new().labels(vec!["remote-access-trojan".to_string()]);
        let malware = Malware::with_options(false, options).unwrap();
        assert_eq!(
            malware.base.labels.as_deref(),
            Some(&["remote-access-trojan".to_string()][..])
        );
    }

    #[test]
    fn test_grouping_requires_refs() {
        let target = Identifier::new_random(ObjectType::Indicator);
        assert!(Grouping::new("suspicious-activity", vec![]).is_err());
        assert!(Grouping::new("", vec![target.clone()]).is_err());
        assert!(Grouping::new("suspicious-activity", vec![target]).is_ok());
    }

    #[test]
    fn test_note_and_opinion_require_refs() {
        let target = Identifier::new_random(ObjectType::Campaign);
        assert!(Note::new("interesting", vec![]).is_err());
        assert!(Note::new("", vec![target.clone()]).is_err());
        assert!(Opinion::new("agree", vec![]).is_err());
        assert!(Opinion::new("", vec![target.clone()]).is_err());
        assert!(Note::new("interesting", vec![target.clone()]).is_ok());
        assert!(Opinion::new("agree", vec![target]).is_ok());
    }

    #[test]
    fn test_observed_data_bounds() {
        let now = Timestamp::now();
        let target = Identifier::new_derived(ObjectType::DomainName, "[\"example.com\"]");
        assert!(ObservedData::new(now, now, 0, vec![target.clone()]).is_err());
        assert!(ObservedData::new(now, now, 1, vec![]).is_err());
        let observed = ObservedData::new(now, now, 3, vec![target]).unwrap();
        assert_eq!(observed.number_observed, 3);
    }

    #[test]
    fn test_location_disjunction() {
        assert!(Location::new_region("").is_err());
        let by_region = Location::new_region("northern-america").unwrap();
        assert!(by_region.validate().is_ok());

        let mut broken = by_region.clone();
        broken.region = None;
        assert!(broken.validate().is_err());

        let by_position = Location::new_position(48.8566, 2.3522).unwrap();
        assert!(by_position.validate().is_ok());
    }

    #[test]
    fn test_validate_catches_post_construction_mutation() {
        let mut tool = Tool::new("mimikatz").unwrap();
        tool.name.clear();
        assert!(matches!(
            tool.validate(),
            Err(Error::PropertyMissing("name"))
        ));
    }

    #[test]
    fn test_report_requires_refs() {
        let now = Timestamp::now();
        assert!(Report::new("q3", now, vec![]).is_err());
        let target = Identifier::new_random(ObjectType::Malware);
        let report = Report::new("q3", now, vec![target]).unwrap();
        assert_eq!(report.published, now);
    }

    #[test]
    fn test_note_abstract_serializes_under_wire_name() {
        let target = Identifier::new_random(ObjectType::Campaign);
        let mut note = Note::new("body", vec![target]).unwrap();
        note.abstract_text = Some("summary".to_string());
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"abstract\":\"summary\""));
        assert!(!json.contains("abstract_text"));
    }
}
