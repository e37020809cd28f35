use serde::Serialize;

pub mod contact;

#[derive(Serialize)]
pub struct ApiOk {
    pub ok: bool,
}
