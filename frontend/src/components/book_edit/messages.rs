use common::forms::book::{BookField, RecField};
use common::model::book::BookData;

pub enum Msg {
    FieldChanged(BookField, String),
    RecChanged(usize, RecField, String),
    AddRecommendation,
    RemoveRecommendation(usize),
    Submit,
    SaveSucceeded(BookData),
    SaveFailed(String),
}
