use sqlx::SqlitePool;

use crate::config::{CodeOfConduct, CommunityInfo, CODE_OF_CONDUCT, COMMUNITY_INFO};
use crate::services::markdown_lite;
use crate::services::platform_service;

/// Code of conduct as handed to the template. The four `*_html` fields are
/// already-escaped HTML; everything else is plain text.
pub struct RenderedCodeOfConduct {
    pub title_ko: &'static str,
    pub title_en: &'static str,
    pub description_ko: &'static str,
    pub description_en: &'static str,
    pub community_title_ko: &'static str,
    pub community_title_en: &'static str,
    pub community_content_ko_html: String,
    pub community_content_en_html: String,
    pub standards_title_ko: &'static str,
    pub standards_title_en: &'static str,
    pub standards_content_ko: &'static str,
    pub standards_content_en: &'static str,
    pub inappropriate_title_ko: &'static str,
    pub inappropriate_title_en: &'static str,
    pub inappropriate_content_ko_html: String,
    pub inappropriate_content_en_html: String,
    pub consequences_title_ko: &'static str,
    pub consequences_title_en: &'static str,
    pub consequences_content_ko: &'static str,
    pub consequences_content_en: &'static str,
    pub contact_title_ko: &'static str,
    pub contact_title_en: &'static str,
    pub contact_content_ko: &'static str,
    pub contact_content_en: &'static str,
    pub source_ko: &'static str,
    pub source_en: &'static str,
    pub license_ko: &'static str,
    pub license_en: &'static str,
    pub psf_url: &'static str,
    pub license_url: &'static str,
    pub pyladies_coc_email: &'static str,
}

pub struct CocPageData {
    pub coc_info: RenderedCodeOfConduct,
    pub community_info: &'static CommunityInfo,
    pub discord_url: Option<String>,
}

pub fn render_code_of_conduct(coc: &'static CodeOfConduct) -> RenderedCodeOfConduct {
    RenderedCodeOfConduct {
        title_ko: coc.title_ko,
        title_en: coc.title_en,
        description_ko: coc.description_ko,
        description_en: coc.description_en,
        community_title_ko: coc.community_title_ko,
        community_title_en: coc.community_title_en,
        community_content_ko_html: markdown_lite::render(coc.community_content_ko),
        community_content_en_html: markdown_lite::render(coc.community_content_en),
        standards_title_ko: coc.standards_title_ko,
        standards_title_en: coc.standards_title_en,
        standards_content_ko: coc.standards_content_ko,
        standards_content_en: coc.standards_content_en,
        inappropriate_title_ko: coc.inappropriate_title_ko,
        inappropriate_title_en: coc.inappropriate_title_en,
        inappropriate_content_ko_html: markdown_lite::render(coc.inappropriate_content_ko),
        inappropriate_content_en_html: markdown_lite::render(coc.inappropriate_content_en),
        consequences_title_ko: coc.consequences_title_ko,
        consequences_title_en: coc.consequences_title_en,
        consequences_content_ko: coc.consequences_content_ko,
        consequences_content_en: coc.consequences_content_en,
        contact_title_ko: coc.contact_title_ko,
        contact_title_en: coc.contact_title_en,
        contact_content_ko: coc.contact_content_ko,
        contact_content_en: coc.contact_content_en,
        source_ko: coc.source_ko,
        source_en: coc.source_en,
        license_ko: coc.license_ko,
        license_en: coc.license_en,
        psf_url: coc.psf_url,
        license_url: coc.license_url,
        pyladies_coc_email: coc.pyladies_coc_email,
    }
}

pub async fn build_coc_page(pool: &SqlitePool) -> sqlx::Result<CocPageData> {
    Ok(CocPageData {
        coc_info: render_code_of_conduct(&CODE_OF_CONDUCT),
        community_info: &COMMUNITY_INFO,
        discord_url: platform_service::discord_url(pool).await?,
    })
}
