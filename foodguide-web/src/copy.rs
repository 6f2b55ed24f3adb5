//! Fixed UI copy. The guide is published in Chinese only.

pub const SITE_TITLE: &str = "寻味地方美食";
pub const SITE_TAGLINE: &str = "走街串巷，找到最地道的那一口";
pub const NAV_HOME: &str = "首页";
pub const NAV_FOODS: &str = "美食推荐";
pub const NAV_ABOUT: &str = "关于";
pub const SECTION_FOODS: &str = "美食推荐";

pub const REGION_ALL: &str = "全部";

pub const LOADING: &str = "正在加载美食信息...";
pub const EMPTY_REGION: &str = "该地区暂无美食信息";
pub const LOAD_FAILED: &str = "数据加载失败，请稍后重试。";

pub const VIEW_DETAILS: &str = "查看详情";
pub const LOCATION_PIN: &str = "📍";
pub const PHONE_MISSING: &str = "暂无";

pub const LABEL_PRICE: &str = "人均";
pub const LABEL_HOURS: &str = "营业时间";
pub const LABEL_LOCATION: &str = "地址";
pub const LABEL_PHONE: &str = "电话";
pub const LABEL_TYPE: &str = "类型";
pub const LABEL_SPECIALTIES: &str = "招牌菜";
pub const LABEL_GALLERY: &str = "图片集";
pub const LABEL_DETAILED_INFO: &str = "详细介绍";

pub const INFO_HISTORY: &str = "🏛️ 历史沿革";
pub const INFO_ENVIRONMENT: &str = "🏞️ 环境特色";
pub const INFO_RECOMMENDATIONS: &str = "💡 推荐理由";
pub const INFO_TIPS: &str = "💭 实用贴士";

pub const CLOSE: &str = "关闭";
pub const FOOTER: &str = "© 寻味地方美食 · 数据仅供参考";
