use uuid::Uuid;

use crate::gui::views::data_ingestion::DataType;
use crate::models::app_state::Tab;
use crate::services::api_client::ApiError;
use crate::services::payloads::{
    AnalyzeResponse, IngestResponse, MonitorResponse, ProcessModelPayload, SupplyChainResponse,
    TimeSeriesResponse,
};

/// A file picked through the native dialog, read fully into memory.
#[derive(Clone, PartialEq)]
pub struct PickedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for PickedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickedFile")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NoOp,
    TabSelected(Tab),
    // Transient notices
    NoticeExpired(u64),
    DismissNotice(u64),
    // Text analysis
    AnalysisTextChanged(String),
    SubmitTextAnalysis,
    TextAnalysisLoaded(Result<AnalyzeResponse, ApiError>),
    // Time series
    SeriesDataChanged(String),
    WindowSizeChanged(String),
    ForecastStepsChanged(String),
    SubmitTimeSeries,
    TimeSeriesLoaded(Result<TimeSeriesResponse, ApiError>),
    // Goods management
    GoodsIdChanged(String),
    GoodsNameChanged(String),
    GoodsCostChanged(String),
    GoodsPriceChanged(String),
    GoodsDateChanged(String),
    SupplierIdChanged(String),
    SupplierNameChanged(String),
    SubmitGoods,
    RemoveGoods(Uuid),
    // Supply chain
    PickSupplyChainFile,
    SupplyChainFilePicked(Option<PickedFile>),
    SubmitSupplyChain,
    SupplyChainLoaded(Result<SupplyChainResponse, ApiError>),
    MonitoringLoaded(Result<MonitorResponse, ApiError>),
    // Data ingestion
    PickIngestionFile,
    IngestionFilePicked(Option<PickedFile>),
    IngestionTypeSelected(DataType),
    ToggleHandleMissing(bool),
    ToggleNormalize(bool),
    ToggleRemoveDuplicates(bool),
    SubmitIngestion,
    IngestionLoaded(Result<IngestResponse, ApiError>),
    // Process modeling
    RefreshProcessModel,
    ProcessModelLoaded(Result<ProcessModelPayload, ApiError>),
    MoveStepUp(usize),
    MoveStepDown(usize),
    DeleteStep(String),
    EditStep(String),
    SaveProcessModel,
    ProcessModelSaved(Result<(), ApiError>),
}
