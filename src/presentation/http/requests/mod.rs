use poem_openapi::Object;

#[derive(Object, Debug)]
pub struct CreateUserRequestDto {
    pub name: String,
    #[oai(validator(min_length = 1))]
    pub username: String,
}

/// Body of both todo creation and todo update.
#[derive(Object, Debug)]
pub struct TodoRequestDto {
    pub title: String,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub deadline: String,
}
