//! Implementation macros for the mechanical parts of the catalog
//!
//! Each kind's `StixObject` impl differs only in its type discriminant and
//! its required-field checks. The macros below generate the discriminant
//! plumbing; the per-kind `validate_fields` method carries the checks.

/// Implement `StixObject` for a kind built on [`crate::DomainProperties`]
macro_rules! impl_domain_object {
    ($name:ident, $variant:ident) => {
        impl $name {
            /// Type discriminant for this kind
            pub const TYPE: stix2_core::ObjectType = stix2_core::ObjectType::$variant;
        }

        impl crate::object::StixObject for $name {
            fn id(&self) -> &stix2_core::Identifier {
                &self.base.id
            }

            fn object_type(&self) -> stix2_core::ObjectType {
                Self::TYPE
            }

            fn created(&self) -> Option<&stix2_core::Timestamp> {
                self.base.created.as_ref()
            }

            fn modified(&self) -> Option<&stix2_core::Timestamp> {
                self.base.modified.as_ref()
            }

            fn validate(&self) -> stix2_core::Result<()> {
                self.base.validate(Self::TYPE)?;
                self.validate_fields()
            }
        }
    };
}

/// Implement `StixObject` for a kind built on [`crate::ObservableProperties`]
///
/// Observables carry no timestamps; `created`/`modified` stay at the trait
/// default of `None`.
macro_rules! impl_observable_object {
    ($name:ident, $variant:ident) => {
        impl $name {
            /// Type discriminant for this kind
            pub const TYPE: stix2_core::ObjectType = stix2_core::ObjectType::$variant;
        }

        impl crate::object::StixObject for $name {
            fn id(&self) -> &stix2_core::Identifier {
                &self.base.id
            }

            fn object_type(&self) -> stix2_core::ObjectType {
                Self::TYPE
            }

            fn validate(&self) -> stix2_core::Result<()> {
                self.base.validate(Self::TYPE)?;
                self.validate_fields()
            }
        }
    };
}
