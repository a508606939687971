use common::model::book::BookData;

pub enum Msg {
    UrlChanged(String),
    FileSelected(web_sys::File),
    FileCleared,
    Submit,
    ExtractionSucceeded(BookData),
    ExtractionFailed(String),
}
