pub mod cursor;
pub mod deferred;
pub mod history;
pub mod index;
pub mod normalize;
pub mod organize;
pub mod query;
pub mod record;
pub mod source;
pub mod suggest;

pub use cursor::NavCursor;
pub use deferred::DEFAULT_DEBOUNCE;
pub use deferred::DeferredQuery;
pub use history::HISTORY_CAP;
pub use history::HistoryEntry;
pub use history::SearchHistory;
pub use index::UnifiedIndex;
pub use organize::ResultGroup;
pub use organize::ResultGroups;
pub use query::QueryOutcome;
pub use query::RESULT_CAP;
pub use query::run_query;
pub use record::OriginCategory;
pub use record::SearchRecord;
pub use source::AssetRow;
pub use source::CustodyRow;
pub use source::RetiredAssetRow;
pub use source::RetiredCustodyRow;
pub use source::Snapshot;
pub use source::SourceSet;
pub use suggest::SUGGEST_MIN_CHARS;
pub use suggest::Suggestion;
pub use suggest::suggest;
