//! Interaction-checker workflow state.

use medmanager_client::{ApiResult, InteractionApi, InteractionCheckResult};
use medmanager_types::{DrugSummary, EntityId};

/// State of one interaction-checker screen: the selected drugs and the
/// report from the last check, if still valid.
///
/// Any change to the selection discards the current report, so a
/// displayed report always describes exactly the drugs shown next to it.
/// A failed check leaves the previous report in place.
pub struct CheckerSession {
    api: InteractionApi,
    selected: Vec<DrugSummary>,
    report: Option<InteractionCheckResult>,
}

impl CheckerSession {
    /// Creates a session with an empty selection.
    pub fn new(api: InteractionApi) -> Self {
        Self {
            api,
            selected: Vec::new(),
            report: None,
        }
    }

    /// Adds a drug to the selection.
    ///
    /// Returns false without changing anything when the drug is already
    /// selected.
    pub fn add_drug(&mut self, drug: DrugSummary) -> bool {
        if self.selected.iter().any(|selected| selected.id == drug.id) {
            return false;
        }
        self.selected.push(drug);
        self.report = None;
        true
    }

    /// Removes a drug from the selection.
    ///
    /// Returns false when the drug was not selected.
    pub fn remove_drug(&mut self, id: EntityId) -> bool {
        let before = self.selected.len();
        self.selected.retain(|drug| drug.id != id);
        if self.selected.len() == before {
            return false;
        }
        self.report = None;
        true
    }

    /// The selected drugs, in selection order.
    pub fn selected(&self) -> &[DrugSummary] {
        &self.selected
    }

    /// Ids of the selected drugs, in selection order.
    pub fn selected_ids(&self) -> Vec<EntityId> {
        self.selected.iter().map(|drug| drug.id).collect()
    }

    /// True once enough drugs are selected to run a check.
    pub fn can_check(&self) -> bool {
        self.selected.len() >= 2
    }

    /// Runs an interaction check over the current selection.
    ///
    /// On success the report replaces any previous one; on failure the
    /// error propagates and the previous report stays untouched.
    pub async fn check(&mut self) -> ApiResult<&InteractionCheckResult> {
        let result = self.api.check(&self.selected_ids()).await?;
        tracing::info!(
            drug_count = self.selected.len(),
            interactions = result.interactions.len(),
            overall = %result.overall_severity,
            "interaction check completed"
        );
        Ok(self.report.insert(result))
    }

    /// The report of the last successful check over the current
    /// selection, if any.
    pub fn report(&self) -> Option<&InteractionCheckResult> {
        self.report.as_ref()
    }

    /// Empties the selection and discards the report.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.report = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTransport;
    use medmanager_client::{ApiClient, ApiError, Transport};
    use medmanager_types::Severity;
    use serde_json::json;
    use std::sync::Arc;

    fn drug(id: EntityId, name: &str) -> DrugSummary {
        DrugSummary {
            id,
            code: format!("D-{id}"),
            name: name.to_string(),
            status: None,
            dosage_form: None,
            route: None,
        }
    }

    fn session(transport: &Arc<ScriptedTransport>) -> CheckerSession {
        let api =
            ApiClient::with_transport(Arc::clone(transport) as Arc<dyn Transport>).interactions();
        CheckerSession::new(api)
    }

    fn check_response(severity: &str) -> serde_json::Value {
        json!({
            "interactions": [{
                "id": 3,
                "drug1": {"id": 5, "code": "ASA-100", "name": "Aspirin 100mg"},
                "drug2": {"id": 12, "code": "WFR-5", "name": "Warfarin 5mg"},
                "severity": severity,
                "mechanism": "Additive anticoagulation",
                "clinicalEffects": "Increased bleeding risk",
                "managementRecommendations": "Avoid combination"
            }],
            "overallSeverity": severity
        })
    }

    #[tokio::test]
    async fn test_duplicate_selection_is_rejected() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut session = session(&transport);

        assert!(session.add_drug(drug(5, "Aspirin 100mg")));
        assert!(!session.add_drug(drug(5, "Aspirin 100mg")));
        assert_eq!(session.selected().len(), 1);
        assert!(!session.can_check());

        assert!(session.add_drug(drug(12, "Warfarin 5mg")));
        assert!(session.can_check());
        assert_eq!(session.selected_ids(), vec![5, 12]);
    }

    #[tokio::test]
    async fn test_check_produces_report() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(200, check_response("Severe"));
        let mut session = session(&transport);
        session.add_drug(drug(5, "Aspirin 100mg"));
        session.add_drug(drug(12, "Warfarin 5mg"));

        let report = session.check().await.unwrap();
        assert_eq!(report.overall_severity, Severity::Severe);
        assert_eq!(session.report().unwrap().interactions.len(), 1);
    }

    #[tokio::test]
    async fn test_selection_change_discards_report() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(200, check_response("Moderate"));
        let mut session = session(&transport);
        session.add_drug(drug(5, "Aspirin 100mg"));
        session.add_drug(drug(12, "Warfarin 5mg"));
        session.check().await.unwrap();
        assert!(session.report().is_some());

        session.add_drug(drug(30, "Ibuprofen 400mg"));
        assert!(session.report().is_none());

        transport.push_json(200, check_response("Moderate"));
        session.check().await.unwrap();
        assert!(session.remove_drug(30));
        assert!(session.report().is_none());
        assert!(!session.remove_drug(99));
    }

    #[tokio::test]
    async fn test_failed_check_keeps_previous_report() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(200, check_response("Mild"));
        transport.push_json(500, json!({"message": "interaction engine offline"}));
        let mut session = session(&transport);
        session.add_drug(drug(5, "Aspirin 100mg"));
        session.add_drug(drug(12, "Warfarin 5mg"));

        session.check().await.unwrap();
        let error = session.check().await.unwrap_err();
        assert!(matches!(error, ApiError::InteractionCheckFailed { .. }));
        assert_eq!(session.report().unwrap().overall_severity, Severity::Mild);
    }

    #[tokio::test]
    async fn test_check_with_single_drug_skips_network() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut session = session(&transport);
        session.add_drug(drug(5, "Aspirin 100mg"));

        let error = session.check().await.unwrap_err();
        assert!(matches!(error, ApiError::InvalidArgument { .. }));
        assert_eq!(transport.request_count(), 0);
    }
}
