/// Community facts shown on every page.
#[derive(Debug)]
pub struct CommunityInfo {
    pub name_ko: &'static str,
    pub name_en: &'static str,
    pub vision_ko: &'static str,
    pub vision_en: &'static str,
    pub mission_ko: &'static str,
    pub mission_en: &'static str,
    pub email: &'static str,
}

pub static COMMUNITY_INFO: CommunityInfo = CommunityInfo {
    name_ko: "파이레이디스 서울",
    name_en: "PyLadies Seoul",
    vision_ko: "모든 여성이 파이썬 커뮤니티에서 환영받고 성장할 수 있는 환경을 만듭니다.",
    vision_en: "Creating an environment where all women are welcomed and can grow in the Python community.",
    mission_ko: "파이썬을 사용하는 여성 개발자들의 네트워킹, 학습, 성장을 지원합니다.",
    mission_en: "Supporting networking, learning, and growth for women Python developers.",
    email: "seoul@pyladies.com",
};
