/// Code of conduct text (adapted from the Python Software Foundation).
///
/// `community_content_*` and `inappropriate_content_*` use markdown-lite
/// (`**bold**`, `*italic*`, newlines) and must be rendered before display.
#[derive(Debug)]
pub struct CodeOfConduct {
    pub title_ko: &'static str,
    pub title_en: &'static str,
    pub description_ko: &'static str,
    pub description_en: &'static str,
    pub community_title_ko: &'static str,
    pub community_title_en: &'static str,
    pub community_content_ko: &'static str,
    pub community_content_en: &'static str,
    pub standards_title_ko: &'static str,
    pub standards_title_en: &'static str,
    pub standards_content_ko: &'static str,
    pub standards_content_en: &'static str,
    pub inappropriate_title_ko: &'static str,
    pub inappropriate_title_en: &'static str,
    pub inappropriate_content_ko: &'static str,
    pub inappropriate_content_en: &'static str,
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

pub static CODE_OF_CONDUCT: CodeOfConduct = CodeOfConduct {
    title_ko: "행동 강령",
    title_en: "Code of Conduct",
    description_ko: "PyLadies Korea의 모든 구성원, 발표자, 후원사, 자원봉사자는 \
        다음 행동 강령을 준수할 것을 요청받습니다. 주최자는 이 규칙을 \
        모든 행사 기간 동안 시행할 것입니다. 우리는 모든 참가자에게 안전한 \
        환경을 보장하기 위해 협조를 기대합니다.",
    description_en: "All members, speakers, sponsors and volunteers at any PyLadies Korea \
        event are required to agree with the following code of conduct. \
        Organizers will enforce this code throughout the event. We are \
        expecting cooperation from all participants to help ensuring a safe \
        environment for everybody.",
    community_title_ko: "파이썬 커뮤니티",
    community_title_en: "The Python Community",
    community_content_ko: "파이썬 커뮤니티의 구성원들은 **개방적이고, 사려 깊으며, 존중합니다**. \
        이러한 가치를 강화하는 행동은 긍정적인 환경에 기여하며, 다음을 포함합니다:\n\n\
        • **개방적이기**: 커뮤니티 구성원들은 PEP, 패치, 문제 등 모든 면에서 \
        협업에 열려 있습니다.\n\
        • **커뮤니티에 최선인 것에 집중하기**: 우리는 커뮤니티에 정해진 절차를 \
        존중하며 그 안에서 활동합니다.\n\
        • **시간과 노력을 인정하기**: 우리는 파이썬 커뮤니티에 널리 퍼져 있는 \
        자원봉사 노력을 존중합니다.\n\
        • **다양한 관점과 경험을 존중하기**: 우리는 건설적인 의견과 비판을 수용합니다.\n\
        • **다른 커뮤니티 구성원들에게 공감하기**: 우리는 대면이든 온라인이든 \
        소통에서 세심하게 주의를 기울입니다.\n\
        • **사려 깊기**: 커뮤니티 구성원들은 동료들 - 다른 Python 사용자들을 \
        배려합니다.\n\
        • **존중하기**: 우리는 다른 사람들, 그들의 입장, 기술, 헌신, 노력을 \
        존중합니다.\n\
        • **건설적인 비판을 우아하게 받아들이기**: 우리가 동의하지 않을 때, \
        우리는 이슈를 제기할 때 정중합니다.\n\
        • **환영하고 포용적인 언어 사용하기**: 우리는 우리 활동에 참여하고자 하는 \
        모든 사람을 받아들입니다.",
    community_content_en: "Members of the Python community are **open, considerate, and \
        respectful**. Behaviours that reinforce these values contribute to a \
        positive environment, and include:\n\n\
        • **Being open**: Members of the community are open to collaboration, \
        whether it's on PEPs, patches, problems, or otherwise.\n\
        • **Focusing on what is best for the community**: We're respectful of \
        the processes set forth in the community, and we work within them.\n\
        • **Acknowledging time and effort**: We're respectful of the \
        volunteer efforts that permeate the Python community.\n\
        • **Being respectful of differing viewpoints and experiences**: We're \
        receptive to constructive comments and criticism.\n\
        • **Showing empathy towards other community members**: We're attentive \
        in our communications, whether in person or online.\n\
        • **Being considerate**: Members of the community are considerate of \
        their peers – other Python users.\n\
        • **Being respectful**: We're respectful of others, their positions, \
        their skills, their commitments, and their efforts.\n\
        • **Gracefully accepting constructive criticism**: When we disagree, \
        we are courteous in raising our issues.\n\
        • **Using welcoming and inclusive language**: We're accepting of all \
        who wish to take part in our activities.",
    standards_title_ko: "우리의 기준",
    standards_title_en: "Our Standards",
    standards_content_ko: "우리 커뮤니티의 모든 구성원은 자신의 정체성을 존중받을 권리가 있습니다. \
        Python 커뮤니티는 나이, 성별 정체성과 표현, 성적 지향, 장애, 신체적 \
        외모, 체형, 민족, 국적, 인종, 종교(또는 종교 없음), 교육, 또는 \
        사회경제적 지위에 관계없이 모든 사람에게 긍정적인 경험을 제공하기 위해 \
        노력합니다.",
    standards_content_en: "Every member of our community has the right to have their identity \
        respected. The Python community is dedicated to providing a positive \
        experience for everyone, regardless of age, gender identity and \
        expression, sexual orientation, disability, physical appearance, \
        body size, ethnicity, nationality, race, or religion (or lack \
        thereof), education, or socio-economic status.",
    inappropriate_title_ko: "부적절한 행동",
    inappropriate_title_en: "Inappropriate Behavior",
    inappropriate_content_ko: "참가자의 허용되지 않는 행동의 예는 다음과 같습니다:\n\n\
        • 어떤 형태로든 참가자에 대한 괴롭힘\n\
        • 고의적인 협박, 스토킹, 또는 따라다니기\n\
        • 괴롭힘 목적으로 온라인 활동을 기록하거나 스크린샷 찍기\n\
        • 명시적 허가 없이 타인의 개인 정보(물리적 또는 전자적 주소 등) 게시\n\
        • 다른 사람을 향한 폭력적 위협이나 언어\n\
        • 자살하거나 자해하도록 격려하는 것을 포함하여 개인에 대한 폭력이나 \
        괴롭힘 선동\n\
        • 다른 사람을 괴롭히거나 금지를 우회하기 위해 추가 온라인 계정 생성\n\
        • 온라인 커뮤니티나 컨퍼런스 장소에서 성적 언어와 이미지 사용\n\
        • 고정관념에 기반한 모욕, 비하, 또는 농담\n\
        • 과도한 욕설\n\
        • 원치 않는 성적 관심이나 접근\n\
        • 동의 없이 또는 중단 요청 후에도 하는 원치 않는 신체적 접촉\n\
        • 타인과 부적절한 수준의 친밀감을 요구하거나 가정하는 부적절한 사회적 \
        접촉 패턴\n\
        • 온라인 커뮤니티 토론, 대면 프레젠테이션, 또는 기타 대면 이벤트의 \
        지속적인 방해\n\
        • 중단 요청 후에도 계속되는 일대일 소통\n\
        • 다양한 배경을 가진 사람들을 포함한 전문적인 청중에게 부적절한 기타 행동",
    inappropriate_content_en: "Examples of unacceptable behavior by participants include:\n\n\
        • Harassment of any participants in any form\n\
        • Deliberate intimidation, stalking, or following\n\
        • Logging or taking screenshots of online activity for harassment \
        purposes\n\
        • Publishing others' private information without explicit permission\n\
        • Violent threats or language directed against another person\n\
        • Incitement of violence or harassment towards any individual\n\
        • Creating additional online accounts to harass another person or \
        circumvent a ban\n\
        • Sexual language and imagery in online communities or conference \
        venues\n\
        • Insults, put downs, or jokes that are based upon stereotypes\n\
        • Excessive swearing\n\
        • Unwelcome sexual attention or advances\n\
        • Unwelcome physical contact without consent or after a request to \
        stop\n\
        • Pattern of inappropriate social contact\n\
        • Sustained disruption of online community discussions or in-person \
        events\n\
        • Continued one-on-one communication after requests to cease\n\
        • Other conduct inappropriate for a professional audience",
    consequences_title_ko: "결과",
    consequences_title_en: "Consequences",
    consequences_content_ko: "참가자가 이 행동 강령을 위반하는 행동에 참여하는 경우, \
        PyLadies 행동 강령 팀은 가해자에 대한 경고나 커뮤니티 및 커뮤니티 \
        이벤트에서의 퇴장(이벤트 티켓 환불 없음)을 포함하여 적절하다고 \
        판단되는 모든 조치를 취할 수 있습니다.",
    consequences_content_en: "If a participant engages in behavior that violates this code of \
        conduct, the PyLadies Code of Conduct team may take any action they \
        deem appropriate, including warning the offender or expulsion from \
        the community and community events with no refund of event tickets.",
    contact_title_ko: "연락처 정보",
    contact_title_en: "Contact Information",
    contact_content_ko: "누군가가 행동 강령을 위반하고 있다고 생각되거나 다른 우려 사항이 있다면, \
        즉시 PyLadies 행동 강령 작업 그룹의 구성원에게 연락하십시오. \
        seoul@pyladies.com으로 이메일을 보내실 수 있습니다.",
    contact_content_en: "If you believe that someone is violating the code of conduct, or have \
        any other concerns, please contact a member of the PyLadies Code of \
        Conduct working group immediately. They can be reached by emailing \
        seoul@pyladies.com.",
    source_ko: "이 행동 강령은 Python Software Foundation에서 수정되었습니다.",
    source_en: "This Code of Conduct has been adapted from the Python Software Foundation.",
    license_ko: "Creative Commons Attribution-ShareAlike 3.0 Unported License",
    license_en: "Creative Commons Attribution-ShareAlike 3.0 Unported License",
    psf_url: "https://www.python.org/psf/conduct/",
    license_url: "https://creativecommons.org/licenses/by-sa/3.0/",
    pyladies_coc_email: "seoul@pyladies.com",
};
