//! Park directory fetched from a feature service.
//!
//! The park-boundary layer of the scene exposes a query endpoint returning
//! one attribute record per park. The records populate the park selection
//! combobox, sorted alphabetically. The query is fire-and-forget: until it
//! resolves the combobox stays in the loading state, and there is no timeout
//! or cancellation.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::WaymarkError;

/// Attribute record of a single park.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParkRecord {
    /// Display name of the park unit.
    #[serde(rename = "UNIT_NAME")]
    pub unit_name: String,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    features: Vec<QueryFeature>,
}

#[derive(Debug, Deserialize)]
struct QueryFeature {
    attributes: ParkRecord,
}

/// Source of park attribute records.
#[async_trait]
pub trait ParkSource {
    /// Queries all park records from the source.
    async fn query(&self) -> Result<Vec<ParkRecord>, WaymarkError>;
}

/// Park source backed by a feature-service query endpoint.
#[cfg(not(target_arch = "wasm32"))]
pub struct RestParkSource {
    url: String,
    out_field: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl RestParkSource {
    /// Creates a source querying the given feature-service layer URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            out_field: "UNIT_NAME".into(),
        }
    }

    /// Sets the attribute field the query requests.
    pub fn with_out_field(mut self, out_field: impl Into<String>) -> Self {
        self.out_field = out_field.into();
        self
    }

    fn query_url(&self) -> String {
        format!(
            "{}/query?where=1%3D1&outFields={}&returnGeometry=false&f=json",
            self.url, self.out_field
        )
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl ParkSource for RestParkSource {
    async fn query(&self) -> Result<Vec<ParkRecord>, WaymarkError> {
        let url = self.query_url();
        log::debug!("querying park records from {url}");

        let bytes = reqwest::get(&url).await?.bytes().await?;
        let response: QueryResponse = serde_json::from_slice(&bytes)?;

        Ok(response
            .features
            .into_iter()
            .map(|feature| feature.attributes)
            .collect())
    }
}

/// Loading state of the park selection control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// The park query has not completed yet.
    Loading,
    /// The options are populated and the control is usable.
    Ready,
}

impl Default for LoadState {
    fn default() -> Self {
        LoadState::Loading
    }
}

/// One option of the park selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkOption {
    value: usize,
    label: String,
}

impl ParkOption {
    /// Value of the option: the index of the park in the queried record list.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Park name shown to the user.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Model of the park selection combobox.
///
/// Starts in the loading state with a loading placeholder. Once the query
/// resolves, [`populate`](ParkSelect::populate) fills the options, sorts them
/// alphabetically and switches the placeholder to the ready prompt. Option
/// values keep pointing at the originally queried records, so a selection
/// can be resolved to the record (and its camera target) regardless of the
/// sort order.
#[derive(Debug, Default)]
pub struct ParkSelect {
    options: Vec<ParkOption>,
    state: LoadState,
}

impl ParkSelect {
    /// Creates an empty control in the loading state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current loading state of the control.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Placeholder text shown above the options.
    pub fn placeholder(&self) -> &'static str {
        match self.state {
            LoadState::Loading => "Loading parks...",
            LoadState::Ready => "Select a Park",
        }
    }

    /// The options in display (alphabetical) order.
    pub fn options(&self) -> &[ParkOption] {
        &self.options
    }

    /// Fills the control with the queried records and makes it ready.
    pub fn populate(&mut self, records: Vec<ParkRecord>) {
        for (value, record) in records.into_iter().enumerate() {
            self.options.push(ParkOption {
                value,
                label: record.unit_name,
            });
        }
        self.sort_options();
        self.state = LoadState::Ready;
    }

    /// Returns the option with the given value, if any.
    pub fn select(&self, value: usize) -> Option<&ParkOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// Queries the source and populates the control.
    ///
    /// On a query failure the control stays in the loading state.
    pub async fn load_from(
        &mut self,
        source: &(impl ParkSource + ?Sized),
    ) -> Result<(), WaymarkError> {
        let records = source.query().await.map_err(|error| {
            log::warn!("park query failed: {error}");
            error
        })?;
        self.populate(records);
        Ok(())
    }

    fn sort_options(&mut self) {
        self.options.sort_by(|a, b| a.label.cmp(&b.label));
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn records(names: &[&str]) -> Vec<ParkRecord> {
        names
            .iter()
            .map(|name| ParkRecord {
                unit_name: (*name).into(),
            })
            .collect()
    }

    #[test]
    fn populate_sorts_labels_and_keeps_values() {
        let mut select = ParkSelect::new();
        select.populate(records(&["Yosemite", "Acadia", "Glacier"]));

        let labels: Vec<_> = select.options().iter().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["Acadia", "Glacier", "Yosemite"]);

        // Values still point at the original query order.
        assert_eq!(select.select(0).map(|o| o.label()), Some("Yosemite"));
        assert_eq!(select.select(2).map(|o| o.label()), Some("Glacier"));
        assert_eq!(select.state(), LoadState::Ready);
        assert_eq!(select.placeholder(), "Select a Park");
    }

    #[test]
    fn control_starts_loading() {
        let select = ParkSelect::new();
        assert_eq!(select.state(), LoadState::Loading);
        assert_eq!(select.placeholder(), "Loading parks...");
        assert!(select.options().is_empty());
    }

    #[test]
    fn query_response_decodes_attribute_records() {
        let payload = r#"{
            "features": [
                { "attributes": { "UNIT_NAME": "Glacier National Park" } },
                { "attributes": { "UNIT_NAME": "Acadia National Park" } }
            ]
        }"#;

        let response: QueryResponse = serde_json::from_str(payload).expect("decoding failed");
        assert_eq!(response.features.len(), 2);
        assert_eq!(
            response.features[0].attributes.unit_name,
            "Glacier National Park"
        );
    }

    struct StubSource(Vec<ParkRecord>);

    #[async_trait]
    impl ParkSource for StubSource {
        async fn query(&self) -> Result<Vec<ParkRecord>, WaymarkError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ParkSource for FailingSource {
        async fn query(&self) -> Result<Vec<ParkRecord>, WaymarkError> {
            Err(WaymarkError::IO)
        }
    }

    #[test]
    fn load_from_populates_control() {
        let mut select = ParkSelect::new();
        let source = StubSource(records(&["Zion", "Arches"]));

        tokio_test::block_on(select.load_from(&source)).expect("loading failed");

        assert_eq!(select.state(), LoadState::Ready);
        assert_eq!(select.options().len(), 2);
        assert_eq!(select.options()[0].label(), "Arches");
    }

    #[test]
    fn failed_query_leaves_control_loading() {
        let mut select = ParkSelect::new();

        assert_matches!(
            tokio_test::block_on(select.load_from(&FailingSource)),
            Err(WaymarkError::IO)
        );
        assert_eq!(select.state(), LoadState::Loading);
        assert!(select.options().is_empty());
    }
}
