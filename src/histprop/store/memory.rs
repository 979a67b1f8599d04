use super::PropertySource;
use crate::error::{HistPropError, Result};
use crate::model::Property;

/// In-memory source for testing and development.
#[derive(Default)]
pub struct InMemorySource {
    properties: Vec<Property>,
    unreachable: bool,
}

impl InMemorySource {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties,
            unreachable: false,
        }
    }

    /// A source whose fetch always fails.
    pub fn unreachable() -> Self {
        Self {
            properties: Vec::new(),
            unreachable: true,
        }
    }
}

impl PropertySource for InMemorySource {
    fn fetch(&self) -> Result<Vec<Property>> {
        if self.unreachable {
            return Err(HistPropError::Load("in-memory source is unreachable".into()));
        }
        Ok(self.properties.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::PropertyImage;

    pub fn sample_property(filename: &str, address: &str) -> Property {
        let mut property = Property::new(filename);
        property.file_path = format!("html_files/{}.html", filename);
        property.property_info.address = Some(address.to_string());
        property
    }

    pub struct SourceFixture {
        pub properties: Vec<Property>,
    }

    impl Default for SourceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SourceFixture {
        pub fn new() -> Self {
            Self {
                properties: Vec::new(),
            }
        }

        /// The two-record collection used throughout the engine tests.
        pub fn elm_and_oak() -> Self {
            Self::new()
                .with_styled("Elm_12", "12 Elm Street", "Colonial")
                .with_styled("Oak_45", "45 Oak Ave", "Victorian")
        }

        pub fn with_property(mut self, property: Property) -> Self {
            self.properties.push(property);
            self
        }

        pub fn with_address(self, filename: &str, address: &str) -> Self {
            self.with_property(sample_property(filename, address))
        }

        pub fn with_styled(self, filename: &str, address: &str, style: &str) -> Self {
            let mut property = sample_property(filename, address);
            property.property_info.style_form = Some(style.to_string());
            self.with_property(property)
        }

        pub fn with_surveyed(
            self,
            filename: &str,
            address: &str,
            condition: &str,
            built: &str,
        ) -> Self {
            let mut property = sample_property(filename, address);
            property.property_info.condition = Some(condition.to_string());
            property.property_info.construction_date = Some(built.to_string());
            self.with_property(property)
        }

        pub fn with_unaddressed(self, filename: &str) -> Self {
            self.with_property(Property::new(filename))
        }

        pub fn with_photographed(self, filename: &str, address: &str, photos: usize) -> Self {
            let mut property = sample_property(filename, address);
            property.images = (0..photos)
                .map(|i| PropertyImage {
                    src: format!("images/{}_{}.jpg", filename, i + 1),
                    alt: format!("Photo {}", i + 1),
                    style: String::new(),
                })
                .collect();
            self.with_property(property)
        }

        pub fn source(self) -> InMemorySource {
            InMemorySource::new(self.properties)
        }
    }
}
