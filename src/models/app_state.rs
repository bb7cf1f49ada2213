use std::sync::Arc;

use iced::Command;
use log::{info, warn};
use uuid::Uuid;

use crate::gui::views::data_ingestion::DataType;
use crate::gui::widgets::notice::{Notice, NoticeLevel};
use crate::models::goods::{GoodsForm, GoodsRecord};
use crate::models::messages::{Message, PickedFile};
use crate::models::request_state::RequestState;
use crate::services::api_client::ApiClient;
use crate::services::payloads::{
    AnalyzeResponse, IngestResponse, MissingValueStrategy, MonitorMetrics, MonitorResponse,
    NormalizeMethod, PreprocessingOptions, ProcessStep, SupplyChainResponse, TimeSeriesRequest,
    TimeSeriesResponse,
};
use crate::services::prediction::PredictionProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    TextAnalysis,
    TimeSeries,
    Goods,
    SupplyChain,
    Ingestion,
    ProcessModel,
}

const ALL_TABS: [Tab; 6] = [
    Tab::TextAnalysis,
    Tab::TimeSeries,
    Tab::Goods,
    Tab::SupplyChain,
    Tab::Ingestion,
    Tab::ProcessModel,
];

impl Tab {
    pub fn all() -> &'static [Tab] {
        &ALL_TABS
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::TextAnalysis => "Text Analysis",
            Tab::TimeSeries => "Time Series",
            Tab::Goods => "Goods Management",
            Tab::SupplyChain => "Supply Chain",
            Tab::Ingestion => "Data Ingestion",
            Tab::ProcessModel => "Process Modeling",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextAnalysisState {
    pub text: String,
    pub request: RequestState<AnalyzeResponse>,
}

#[derive(Debug, Clone)]
pub struct TimeSeriesState {
    pub raw_data: String,
    pub window_size: String,
    pub forecast_steps: String,
    pub request: RequestState<TimeSeriesResponse>,
}

impl Default for TimeSeriesState {
    fn default() -> Self {
        Self {
            raw_data: String::new(),
            window_size: "5".to_string(),
            forecast_steps: "3".to_string(),
            request: RequestState::Idle,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GoodsState {
    pub form: GoodsForm,
    pub records: Vec<GoodsRecord>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SupplyChainState {
    pub file: Option<PickedFile>,
    pub request: RequestState<SupplyChainResponse>,
    pub monitoring: RequestState<MonitorResponse>,
}

#[derive(Debug, Clone, Default)]
pub struct IngestionState {
    pub file: Option<PickedFile>,
    pub data_type: DataType,
    pub handle_missing: bool,
    pub normalize: bool,
    pub remove_duplicates: bool,
    pub request: RequestState<IngestResponse>,
}

impl IngestionState {
    pub fn preprocessing(&self) -> PreprocessingOptions {
        PreprocessingOptions {
            handle_missing: self.handle_missing.then(MissingValueStrategy::mean),
            normalize: self.normalize.then(NormalizeMethod::minmax),
            remove_duplicates: self.remove_duplicates,
        }
    }
}

/// What the in-flight process-model POST was for, so the terminal notice can
/// say the right thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessAction {
    #[default]
    Save,
    Delete,
}

#[derive(Debug, Clone, Default)]
pub struct ProcessModelState {
    pub steps: Vec<ProcessStep>,
    pub fetch: RequestState<()>,
    pub saving: bool,
    pub fetched_once: bool,
    pub last_action: ProcessAction,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub active_tab: Tab,
    pub notices: Vec<Notice>,
    next_notice_id: u64,
    pub text_analysis: TextAnalysisState,
    pub time_series: TimeSeriesState,
    pub goods: GoodsState,
    pub supply_chain: SupplyChainState,
    pub ingestion: IngestionState,
    pub process_model: ProcessModelState,
}

impl DashboardState {
    /// Enqueues a transient notice and schedules its expiry.
    fn push_notice(&mut self, level: NoticeLevel, message: impl Into<String>) -> Command<Message> {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notices.push(Notice { id, level, message: message.into() });
        let delay = level.dismiss_after();
        Command::perform(tokio::time::sleep(delay), move |_| Message::NoticeExpired(id))
    }

    fn fetch_process_model(&mut self, api: &Arc<ApiClient>) -> Command<Message> {
        self.process_model.fetch = RequestState::Loading;
        self.process_model.fetched_once = true;
        let api = Arc::clone(api);
        Command::perform(
            async move { api.fetch_process_model().await },
            Message::ProcessModelLoaded,
        )
    }

    pub fn update(
        &mut self,
        message: Message,
        api: &Arc<ApiClient>,
        predictor: &dyn PredictionProvider,
    ) -> Command<Message> {
        match message {
            Message::NoOp => Command::none(),
            Message::TabSelected(tab) => {
                self.active_tab = tab;
                // The process-model screen loads its data the first time it
                // is shown, like the old mount-time fetch.
                if tab == Tab::ProcessModel && !self.process_model.fetched_once {
                    return self.fetch_process_model(api);
                }
                Command::none()
            }
            Message::NoticeExpired(id) | Message::DismissNotice(id) => {
                self.notices.retain(|n| n.id != id);
                Command::none()
            }

            // -- Text analysis ------------------------------------------------
            Message::AnalysisTextChanged(text) => {
                self.text_analysis.text = text;
                Command::none()
            }
            Message::SubmitTextAnalysis => {
                let text = self.text_analysis.text.trim().to_string();
                if text.is_empty() {
                    let message = "Please enter some text to analyze".to_string();
                    self.text_analysis.request = RequestState::Failed(message.clone());
                    return self.push_notice(NoticeLevel::Error, message);
                }
                self.text_analysis.request = RequestState::Loading;
                let api = Arc::clone(api);
                Command::perform(
                    async move { api.analyze_text(&text).await },
                    Message::TextAnalysisLoaded,
                )
            }
            Message::TextAnalysisLoaded(result) => match result {
                Ok(response) => {
                    info!("text analysis completed");
                    self.text_analysis.request = RequestState::Success(response);
                    self.push_notice(NoticeLevel::Success, "Analysis complete")
                }
                Err(err) => {
                    warn!("text analysis failed: {err}");
                    let message = err.to_string();
                    self.text_analysis.request = RequestState::Failed(message.clone());
                    self.push_notice(NoticeLevel::Error, message)
                }
            },

            // -- Time series --------------------------------------------------
            Message::SeriesDataChanged(raw) => {
                self.time_series.raw_data = raw;
                Command::none()
            }
            Message::WindowSizeChanged(raw) => {
                self.time_series.window_size = raw;
                Command::none()
            }
            Message::ForecastStepsChanged(raw) => {
                self.time_series.forecast_steps = raw;
                Command::none()
            }
            Message::SubmitTimeSeries => {
                let mut errors = Vec::new();
                let raw = self.time_series.raw_data.trim();
                let data = if raw.is_empty() {
                    errors.push("Please enter time series data".to_string());
                    None
                } else {
                    match serde_json::from_str::<serde_json::Value>(raw) {
                        Ok(value) => Some(value),
                        Err(_) => {
                            errors.push("Time Series Data must be valid JSON".to_string());
                            None
                        }
                    }
                };
                let window_size = match self.time_series.window_size.trim().parse::<u32>() {
                    Ok(v) if v >= 1 => Some(v),
                    Ok(_) => {
                        errors.push("Window Size must be at least 1".to_string());
                        None
                    }
                    Err(_) => {
                        errors.push("Window Size must be a number".to_string());
                        None
                    }
                };
                let forecast_steps = match self.time_series.forecast_steps.trim().parse::<u32>() {
                    Ok(v) if v >= 1 => Some(v),
                    Ok(_) => {
                        errors.push("Forecast Steps must be at least 1".to_string());
                        None
                    }
                    Err(_) => {
                        errors.push("Forecast Steps must be a number".to_string());
                        None
                    }
                };

                if !errors.is_empty() {
                    let message = errors.join(", ");
                    self.time_series.request = RequestState::Failed(message.clone());
                    return self.push_notice(NoticeLevel::Error, message);
                }

                self.time_series.request = RequestState::Loading;
                let request = TimeSeriesRequest {
                    data: data.unwrap_or_default(),
                    window_size: window_size.unwrap_or(1),
                    forecast_steps: forecast_steps.unwrap_or(1),
                };
                let api = Arc::clone(api);
                Command::perform(
                    async move { api.analyze_timeseries(&request).await },
                    Message::TimeSeriesLoaded,
                )
            }
            Message::TimeSeriesLoaded(result) => match result {
                Ok(response) => {
                    info!("time series analysis completed");
                    self.time_series.request = RequestState::Success(response);
                    self.push_notice(NoticeLevel::Success, "Time series analyzed")
                }
                Err(err) => {
                    warn!("time series analysis failed: {err}");
                    let message = err.to_string();
                    self.time_series.request = RequestState::Failed(message.clone());
                    self.push_notice(NoticeLevel::Error, message)
                }
            },

            // -- Goods management ---------------------------------------------
            Message::GoodsIdChanged(v) => {
                self.goods.form.goods_id = v;
                Command::none()
            }
            Message::GoodsNameChanged(v) => {
                self.goods.form.goods_name = v;
                Command::none()
            }
            Message::GoodsCostChanged(v) => {
                self.goods.form.cost = v;
                Command::none()
            }
            Message::GoodsPriceChanged(v) => {
                self.goods.form.price = v;
                Command::none()
            }
            Message::GoodsDateChanged(v) => {
                self.goods.form.date = v;
                Command::none()
            }
            Message::SupplierIdChanged(v) => {
                self.goods.form.supplier_id = v;
                Command::none()
            }
            Message::SupplierNameChanged(v) => {
                self.goods.form.supplier_name = v;
                Command::none()
            }
            Message::SubmitGoods => match self.goods.form.validate() {
                Ok(valid) => {
                    let outlook = predictor.outlook(valid.price);
                    self.goods.records.push(GoodsRecord {
                        id: Uuid::new_v4(),
                        goods: valid,
                        outlook,
                    });
                    self.goods.form = GoodsForm::default();
                    self.goods.error = None;
                    self.push_notice(NoticeLevel::Success, "Goods added successfully")
                }
                Err(errors) => {
                    self.goods.error = Some(errors.join(", "));
                    self.push_notice(NoticeLevel::Error, "Please fix the form errors")
                }
            },
            Message::RemoveGoods(id) => {
                self.goods.records.retain(|r| r.id != id);
                Command::none()
            }

            // -- Supply chain -------------------------------------------------
            Message::PickSupplyChainFile => Command::perform(
                pick_data_file("Supply chain data", &["csv", "json", "xlsx"]),
                Message::SupplyChainFilePicked,
            ),
            Message::SupplyChainFilePicked(picked) => {
                if let Some(file) = picked {
                    info!("supply chain file selected: {}", file.name);
                    self.supply_chain.file = Some(file);
                    self.supply_chain.request = RequestState::Idle;
                    self.supply_chain.monitoring = RequestState::Idle;
                }
                Command::none()
            }
            Message::SubmitSupplyChain => {
                let Some(file) = self.supply_chain.file.clone() else {
                    let message = "Please select a file first".to_string();
                    self.supply_chain.request = RequestState::Failed(message.clone());
                    return self.push_notice(NoticeLevel::Error, message);
                };
                self.supply_chain.request = RequestState::Loading;
                self.supply_chain.monitoring = RequestState::Idle;
                let api = Arc::clone(api);
                Command::perform(
                    async move { api.analyze_supply_chain(&file.name, file.bytes).await },
                    Message::SupplyChainLoaded,
                )
            }
            Message::SupplyChainLoaded(result) => match result {
                Ok(response) => {
                    info!("supply chain analysis completed");
                    self.supply_chain.request = RequestState::Success(response);
                    self.supply_chain.monitoring = RequestState::Loading;
                    let notice =
                        self.push_notice(NoticeLevel::Success, "Supply chain analysis complete");
                    let api = Arc::clone(api);
                    let monitor = Command::perform(
                        async move { api.monitor_supply_chain(MonitorMetrics::sample()).await },
                        Message::MonitoringLoaded,
                    );
                    Command::batch([notice, monitor])
                }
                Err(err) => {
                    warn!("supply chain analysis failed: {err}");
                    let message = err.to_string();
                    self.supply_chain.request = RequestState::Failed(message.clone());
                    self.push_notice(NoticeLevel::Error, message)
                }
            },
            Message::MonitoringLoaded(result) => match result {
                Ok(response) => {
                    self.supply_chain.monitoring = RequestState::Success(response);
                    Command::none()
                }
                Err(err) => {
                    warn!("supply chain monitoring failed: {err}");
                    self.supply_chain.monitoring =
                        RequestState::Failed("Error starting monitoring".to_string());
                    self.push_notice(NoticeLevel::Error, "Error starting monitoring")
                }
            },

            // -- Data ingestion -----------------------------------------------
            Message::PickIngestionFile => {
                let data_type = self.ingestion.data_type;
                Command::perform(
                    pick_data_file(data_type.label(), data_type.extensions()),
                    Message::IngestionFilePicked,
                )
            }
            Message::IngestionFilePicked(picked) => {
                if let Some(file) = picked {
                    info!("ingestion file selected: {}", file.name);
                    self.ingestion.file = Some(file);
                    self.ingestion.request = RequestState::Idle;
                }
                Command::none()
            }
            Message::IngestionTypeSelected(data_type) => {
                self.ingestion.data_type = data_type;
                Command::none()
            }
            Message::ToggleHandleMissing(on) => {
                self.ingestion.handle_missing = on;
                Command::none()
            }
            Message::ToggleNormalize(on) => {
                self.ingestion.normalize = on;
                Command::none()
            }
            Message::ToggleRemoveDuplicates(on) => {
                self.ingestion.remove_duplicates = on;
                Command::none()
            }
            Message::SubmitIngestion => {
                let Some(file) = self.ingestion.file.clone() else {
                    let message = "Please select a file first".to_string();
                    self.ingestion.request = RequestState::Failed(message.clone());
                    return self.push_notice(NoticeLevel::Error, message);
                };
                self.ingestion.request = RequestState::Loading;
                let data_type = self.ingestion.data_type;
                let preprocessing = self.ingestion.preprocessing();
                let api = Arc::clone(api);
                Command::perform(
                    async move {
                        api.ingest_data(&file.name, file.bytes, data_type.wire_value(), &preprocessing)
                            .await
                    },
                    Message::IngestionLoaded,
                )
            }
            Message::IngestionLoaded(result) => match result {
                Ok(response) => {
                    info!("data ingestion completed");
                    self.ingestion.request = RequestState::Success(response);
                    self.push_notice(NoticeLevel::Success, "Data processed successfully!")
                }
                Err(err) => {
                    warn!("data ingestion failed: {err}");
                    let message = err.to_string();
                    self.ingestion.request = RequestState::Failed(message.clone());
                    self.push_notice(NoticeLevel::Error, message)
                }
            },

            // -- Process modeling ---------------------------------------------
            Message::RefreshProcessModel => self.fetch_process_model(api),
            Message::ProcessModelLoaded(result) => match result {
                Ok(payload) => {
                    info!("process model loaded: {} steps", payload.steps.len());
                    self.process_model.steps = payload.steps;
                    self.process_model.fetch = RequestState::Success(());
                    Command::none()
                }
                Err(err) => {
                    warn!("process model fetch failed: {err}");
                    self.process_model.fetch =
                        RequestState::Failed("Failed to fetch process model".to_string());
                    self.push_notice(NoticeLevel::Error, "Failed to fetch process model")
                }
            },
            Message::MoveStepUp(index) => {
                if index > 0 && index < self.process_model.steps.len() {
                    self.process_model.steps.swap(index, index - 1);
                }
                Command::none()
            }
            Message::MoveStepDown(index) => {
                if index + 1 < self.process_model.steps.len() {
                    self.process_model.steps.swap(index, index + 1);
                }
                Command::none()
            }
            Message::DeleteStep(id) => {
                self.process_model.steps.retain(|s| s.id != id);
                self.process_model.saving = true;
                self.process_model.last_action = ProcessAction::Delete;
                let steps = self.process_model.steps.clone();
                let api = Arc::clone(api);
                Command::perform(
                    async move { api.save_process_model(&steps).await },
                    Message::ProcessModelSaved,
                )
            }
            Message::EditStep(_) => {
                self.push_notice(NoticeLevel::Info, "Edit functionality coming soon")
            }
            Message::SaveProcessModel => {
                self.process_model.saving = true;
                self.process_model.last_action = ProcessAction::Save;
                let steps = self.process_model.steps.clone();
                let api = Arc::clone(api);
                Command::perform(
                    async move { api.save_process_model(&steps).await },
                    Message::ProcessModelSaved,
                )
            }
            Message::ProcessModelSaved(result) => {
                self.process_model.saving = false;
                let action = self.process_model.last_action;
                match (result, action) {
                    (Ok(()), ProcessAction::Save) => {
                        self.push_notice(NoticeLevel::Success, "Process model saved successfully")
                    }
                    (Ok(()), ProcessAction::Delete) => {
                        self.push_notice(NoticeLevel::Success, "Step deleted successfully")
                    }
                    (Err(err), ProcessAction::Save) => {
                        warn!("process model save failed: {err}");
                        self.push_notice(NoticeLevel::Error, "Failed to save process model")
                    }
                    (Err(err), ProcessAction::Delete) => {
                        warn!("process model delete failed: {err}");
                        self.push_notice(NoticeLevel::Error, "Failed to delete step")
                    }
                }
            }
        }
    }
}

/// Opens the native picker and reads the chosen file fully into memory.
async fn pick_data_file(
    filter_name: &'static str,
    extensions: &'static [&'static str],
) -> Option<PickedFile> {
    let handle = rfd::AsyncFileDialog::new()
        .add_filter(filter_name, extensions)
        .pick_file()
        .await?;
    let bytes = handle.read().await;
    Some(PickedFile { name: handle.file_name(), bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::ApiError;
    use crate::services::payloads::EmbeddingStats;
    use crate::services::prediction::RandomWalkProvider;
    use std::time::Duration;

    fn harness() -> (DashboardState, Arc<ApiClient>, RandomWalkProvider) {
        // Points at a closed port; commands are never executed in these tests.
        let api = Arc::new(ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)));
        (DashboardState::default(), api, RandomWalkProvider)
    }

    #[tokio::test]
    async fn empty_text_fails_validation_without_leaving_failed_state() {
        let (mut state, api, predictor) = harness();
        state.text_analysis.text = "   ".to_string();
        let _ = state.update(Message::SubmitTextAnalysis, &api, &predictor);
        assert_eq!(
            state.text_analysis.request.error(),
            Some("Please enter some text to analyze")
        );
        assert_eq!(state.notices.len(), 1);
    }

    #[tokio::test]
    async fn non_numeric_window_size_names_the_field() {
        let (mut state, api, predictor) = harness();
        state.time_series.raw_data = "[1, 2, 3]".to_string();
        state.time_series.window_size = "five".to_string();
        let _ = state.update(Message::SubmitTimeSeries, &api, &predictor);
        let error = state.time_series.request.error().unwrap();
        assert!(error.contains("Window Size must be a number"), "got: {error}");
    }

    #[test]
    fn valid_time_series_submit_goes_loading() {
        let (mut state, api, predictor) = harness();
        state.time_series.raw_data = r#"[{"step":"a","delay":1}]"#.to_string();
        let _ = state.update(Message::SubmitTimeSeries, &api, &predictor);
        assert!(state.time_series.request.is_loading());
    }

    #[tokio::test]
    async fn goods_cost_above_price_is_rejected_and_nothing_is_stored() {
        let (mut state, api, predictor) = harness();
        state.goods.form = GoodsForm {
            goods_id: "G-1".to_string(),
            goods_name: "Widget".to_string(),
            cost: "12".to_string(),
            price: "10".to_string(),
            date: "2024-03-01".to_string(),
            supplier_id: "S-1".to_string(),
            supplier_name: "Acme".to_string(),
        };
        let _ = state.update(Message::SubmitGoods, &api, &predictor);
        assert!(state
            .goods
            .error
            .as_deref()
            .unwrap()
            .contains("Cost cannot be greater than price"));
        assert!(state.goods.records.is_empty());
    }

    #[tokio::test]
    async fn goods_submit_stores_a_record_with_an_outlook_and_resets_the_form() {
        let (mut state, api, predictor) = harness();
        state.goods.form = GoodsForm {
            goods_id: "G-1".to_string(),
            goods_name: "Widget".to_string(),
            cost: "5".to_string(),
            price: "10".to_string(),
            date: "2024-03-01".to_string(),
            supplier_id: "S-1".to_string(),
            supplier_name: "Acme".to_string(),
        };
        let _ = state.update(Message::SubmitGoods, &api, &predictor);
        assert_eq!(state.goods.records.len(), 1);
        assert_eq!(state.goods.records[0].outlook.points.len(), 3);
        assert_eq!(state.goods.form, GoodsForm::default());
        assert!(state.goods.error.is_none());
    }

    #[tokio::test]
    async fn submit_without_a_file_fails_locally() {
        let (mut state, api, predictor) = harness();
        let _ = state.update(Message::SubmitSupplyChain, &api, &predictor);
        assert_eq!(
            state.supply_chain.request.error(),
            Some("Please select a file first")
        );
        let _ = state.update(Message::SubmitIngestion, &api, &predictor);
        assert_eq!(state.ingestion.request.error(), Some("Please select a file first"));
    }

    #[tokio::test]
    async fn late_response_overwrites_state_last_wins() {
        let (mut state, api, predictor) = harness();
        let first = AnalyzeResponse {
            embeddings: None,
            statistics: Some(EmbeddingStats { mean: vec![1.0], std: vec![] }),
        };
        let _ = state.update(Message::TextAnalysisLoaded(Ok(first)), &api, &predictor);
        let _ = state.update(
            Message::TextAnalysisLoaded(Err(ApiError::Timeout)),
            &api,
            &predictor,
        );
        // No fencing: the stale error clobbers the earlier success.
        assert!(state.text_analysis.request.error().is_some());
    }

    #[tokio::test]
    async fn notices_expire_by_id() {
        let (mut state, api, predictor) = harness();
        let _ = state.push_notice(NoticeLevel::Info, "first");
        let _ = state.push_notice(NoticeLevel::Info, "second");
        assert_eq!(state.notices.len(), 2);
        let first_id = state.notices[0].id;
        let _ = state.update(Message::NoticeExpired(first_id), &api, &predictor);
        assert_eq!(state.notices.len(), 1);
        assert_eq!(state.notices[0].message, "second");
    }

    #[test]
    fn process_steps_reorder_and_clamp() {
        let (mut state, api, predictor) = harness();
        state.process_model.steps = vec![
            ProcessStep { id: "1".to_string(), text: "a".to_string() },
            ProcessStep { id: "2".to_string(), text: "b".to_string() },
            ProcessStep { id: "3".to_string(), text: "c".to_string() },
        ];
        let _ = state.update(Message::MoveStepUp(2), &api, &predictor);
        let order: Vec<&str> = state.process_model.steps.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec!["1", "3", "2"]);

        let _ = state.update(Message::MoveStepUp(0), &api, &predictor);
        let _ = state.update(Message::MoveStepDown(2), &api, &predictor);
        let order: Vec<&str> = state.process_model.steps.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec!["1", "3", "2"]);
    }

    #[test]
    fn deleting_a_step_removes_it_and_marks_a_save_in_flight() {
        let (mut state, api, predictor) = harness();
        state.process_model.steps = vec![
            ProcessStep { id: "1".to_string(), text: "a".to_string() },
            ProcessStep { id: "2".to_string(), text: "b".to_string() },
        ];
        let _ = state.update(Message::DeleteStep("1".to_string()), &api, &predictor);
        assert_eq!(state.process_model.steps.len(), 1);
        assert!(state.process_model.saving);
        assert_eq!(state.process_model.last_action, ProcessAction::Delete);
    }

    #[test]
    fn first_visit_to_process_tab_starts_the_fetch() {
        let (mut state, api, predictor) = harness();
        let _ = state.update(Message::TabSelected(Tab::ProcessModel), &api, &predictor);
        assert!(state.process_model.fetch.is_loading());
        assert!(state.process_model.fetched_once);
    }
}
