use common::model::book::BookData;

use crate::api::ApiError;

pub enum Msg {
    PasswordChanged(String),
    SubmitPassword,
    FetchResolved {
        result: Result<BookData, ApiError>,
        with_password: bool,
    },
}
