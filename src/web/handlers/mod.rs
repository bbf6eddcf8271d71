//! HTML page handlers rendered with Askama templates.

pub mod blog;
pub mod error;
pub mod forms;
pub mod layout;
pub mod pages;
pub mod seo;
pub mod work;

pub use blog::{blog_index_handler, blog_post_handler};
pub use error::{PageError, not_found_handler};
pub use forms::{contact_page_handler, contact_submit_handler, newsletter_submit_handler};
pub use pages::{
    about_handler, hoa_handler, home_handler, pricing_handler, privacy_handler,
    services_handler, small_business_handler, terms_handler,
};
pub use seo::{manifest_handler, robots_handler, sitemap_handler};
pub use work::{case_study_handler, work_handler};
