use crate::config::ScreenSize;
use crate::errors::EngineResult;

/// Mutation interface for a tracker's subject. `None` clears the attribute.
pub trait SubjectController: Send + Sync {
    fn set_user_id(&self, value: Option<&str>) -> EngineResult<()>;
    fn set_network_user_id(&self, value: Option<&str>) -> EngineResult<()>;
    fn set_domain_user_id(&self, value: Option<&str>) -> EngineResult<()>;
    fn set_useragent(&self, value: Option<&str>) -> EngineResult<()>;
    fn set_ip_address(&self, value: Option<&str>) -> EngineResult<()>;
    fn set_timezone(&self, value: Option<&str>) -> EngineResult<()>;
    fn set_language(&self, value: Option<&str>) -> EngineResult<()>;
    fn set_screen_resolution(&self, value: Option<ScreenSize>) -> EngineResult<()>;
    fn set_screen_viewport(&self, value: Option<ScreenSize>) -> EngineResult<()>;
    fn set_color_depth(&self, value: Option<u32>) -> EngineResult<()>;
}
