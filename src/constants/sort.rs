#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClanSort {
    Name,
    #[default]
    CreatedAt,
}

impl ClanSort {
    /// Unknown values fall back to `CreatedAt` instead of erroring.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("name") => ClanSort::Name,
            Some("created_at") => ClanSort::CreatedAt,
            _ => ClanSort::default(),
        }
    }

    /// Column used in `order by`. Never derived from user input.
    pub fn column(&self) -> &'static str {
        match self {
            ClanSort::Name => "name",
            ClanSort::CreatedAt => "created_at",
        }
    }
}
