#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenView {
    pub name: String,
    /// Screen identifier; the engine generates one when absent.
    pub id: Option<String>,
    pub screen_type: Option<String>,
    pub previous_name: Option<String>,
    pub previous_id: Option<String>,
    pub previous_type: Option<String>,
    pub transition_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    pub page_url: String,
    pub page_title: Option<String>,
    pub referrer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeepLinkReceived {
    pub url: String,
    pub referrer: Option<String>,
}
