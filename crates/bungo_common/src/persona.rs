//! Persona-driven prompt construction.
//!
//! Builds generation prompts that frame the model as a named human
//! insider rather than an assistant, which is the pipeline's first
//! line of defense against machine-register output. The persona tables
//! are static data; prompt assembly is pure string work.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Book category a persona is defined for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    SelfHelp,
    Business,
    Technology,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SelfHelp => "self-help",
            Category::Business => "business",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "self-help" => Ok(Category::SelfHelp),
            "business" => Ok(Category::Business),
            "technology" => Ok(Category::Technology),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// An insider-author persona for one category
#[derive(Debug, Clone, Serialize)]
pub struct Persona {
    pub character: &'static str,
    pub background: &'static str,
    pub motivation: &'static str,
    pub tone: &'static str,
    pub expertise: &'static str,
}

const SELF_HELP_PERSONA: Persona = Persona {
    character: "元自己啓発セミナー講師の暴露系ライター",
    background: "20年間業界の内部にいて、嘘と欺瞞を見続けてきた",
    motivation: "業界の腐敗を徹底的に暴露したい",
    tone: "皮肉で攻撃的、内部告発者の怒り",
    expertise: "業界の裏側、洗脳技術、心理操作手法",
};

const BUSINESS_PERSONA: Persona = Persona {
    character: "元大手コンサル会社の暴露系ライター",
    background: "15年間企業の嘘と建前を見続けてきた",
    motivation: "ビジネス界の偽善を徹底的に破壊したい",
    tone: "辛辣で現実的、企業の裏事情暴露",
    expertise: "企業の実態、コンサル業界、経営の嘘",
};

const TECHNOLOGY_PERSONA: Persona = Persona {
    character: "IT業界の内部告発者ライター",
    background: "シリコンバレーで10年働いた元エンジニア",
    motivation: "テック業界の幻想を完全に破壊したい",
    tone: "技術的で冷酷、業界の闇を暴露",
    expertise: "テック業界の実態、スタートアップの嘘、技術幻想",
};

impl Persona {
    pub fn for_category(category: Category) -> &'static Persona {
        match category {
            Category::SelfHelp => &SELF_HELP_PERSONA,
            Category::Business => &BUSINESS_PERSONA,
            Category::Technology => &TECHNOLOGY_PERSONA,
        }
    }
}

/// Preamble that frames the text as an existing human manuscript
/// instead of a request to an assistant.
pub fn anti_ai_preamble(category: Category) -> String {
    let persona = Persona::for_category(category);
    format!(
        "以下は、{character}が書いた書籍の第1章の原稿です。\n\
         この人物は{background}という経歴を持ち、{motivation}という強い動機で執筆しています。\n\n\
         文体の特徴：\n\
         - {tone}\n\
         - 業界用語と専門知識を駆使\n\
         - 感情的で生々しい表現\n\
         - 読者に対する直接的な語りかけ\n\
         - 具体的な体験談と内部情報\n\n\
         注意：この文章は実在の人物による実体験に基づく告発文書であり、\n\
         丁寧語や敬語は一切使用せず、生の感情をそのまま表現しています。\n\n\
         ---\n\n\
         【第1章　原稿】\n",
        character = persona.character,
        background = persona.background,
        motivation = persona.motivation,
        tone = persona.tone,
    )
}

/// Category-specific section naming the concrete targets to attack.
pub fn attack_section(category: Category) -> &'static str {
    match category {
        Category::SelfHelp => {
            "まず、お前らが大好きな「ポジティブシンキング」から破壊してやる。\n\
             次に、「成功者の習慣」とかいう詐欺商材の中身がいかにスカスカか。\n\
             そして、「引き寄せの法則」だの「感謝の力」だの、\n\
             スピリチュアル系のペテンがどうやって作られているか。\n\
             セミナーで使われている心理操作テクニックまで、容赦なく暴露する。\n"
        }
        Category::Business => {
            "まず、「働き方改革」とかいう企業のプロパガンダから破壊してやる。\n\
             次に、「成果主義」「実力主義」という名の搾取システムの手口。\n\
             そして、コンサル業界が「戦略」だの「フレームワーク」だの、\n\
             中身のない概念でどうやって企業から金を巻き上げているか。\n\
             「起業家精神」という名の幻想販売ビジネスの正体も暴露してやる。\n"
        }
        Category::Technology => {
            "まず、「DX」だの「AI革命」だのという技術幻想から破壊してやる。\n\
             次に、「スタートアップ成功神話」の嘘と、\n\
             ベンチャーキャピタルの汚いゲームの実態。\n\
             そして、未経験者を食い物にする「プログラミング学習」業界の詐欺商法。\n\
             テック企業の労働環境と技術者の使い捨ての現実も、全部ぶちまけてやる。\n"
        }
    }
}

/// Hard writing constraints appended to every prompt: bans the
/// machine-response register the validator would reject anyway.
pub fn quality_enforcement_section() -> &'static str {
    "\n【執筆時の絶対条件】\n\
     - 「承知いたしました」「理解いたしました」などのAI応答は絶対禁止\n\
     - 「について考えてみましょう」などの教師的表現禁止\n\
     - 【】★■などの記号使用禁止\n\
     - 丁寧語・敬語の使用禁止\n\
     - 感情的で生々しい表現を多用\n\
     - 具体的な業界体験談を含める\n\
     - 読者を直接挑発する文体\n\
     - 口語的で攻撃的な語りかけ\n\n\
     文体例：\n\
     「お前ら」「だろ」「クソみたいな」「バカを言え」「ふざけるな」\n\
     「〜ってやつ」「〜だってよ」「マジで」「ヤバい」「ムカつく」\n\n\
     これは告発文書だ。礼儀正しく書く必要はない。\n\
     思いっきり汚い言葉を使って、リアルな怒りを表現しろ。\n"
}

/// Assemble the full generation prompt for a category. With
/// `max_intensity` an extra no-restraint block is appended.
pub fn complete_prompt(category: Category, max_intensity: bool) -> String {
    let persona = Persona::for_category(category);
    let mut prompt = format!(
        "{preamble}\n\
         俺は{background}。\n\
         {category}業界の腐った内側を、今から全部ぶちまけてやる。\n\n\
         お前らが信じている{category}の常識なんて、全部デタラメだ。\n\
         業界の連中が、お前らから金を巻き上げるために作り上げた嘘っぱちだ。\n\n\
         俺がこの{expertise}の世界で見てきた真実を、容赦なく叩きつけてやる。\n\n\
         {attack}\n\
         覚悟しろ。今までの常識が全部ひっくり返るぞ。\n\n\
         8000文字以上で書け。遠慮するな。\n\
         {enforcement}",
        preamble = anti_ai_preamble(category),
        background = persona.background,
        category = category.as_str(),
        expertise = persona.expertise,
        attack = attack_section(category),
        enforcement = quality_enforcement_section(),
    );

    if max_intensity {
        prompt.push_str(
            "\n【最大強度設定】\n容赦するな。業界を完全に破壊しろ。\n遠慮は一切無用。思いっきり攻撃的に書け。\n",
        );
    }

    prompt
}

/// Outcome of checking a prompt before it is sent to the generator
#[derive(Debug, Clone, Serialize)]
pub struct PromptCheck {
    pub is_valid: bool,
    pub issues: Vec<&'static str>,
}

/// Verify a prompt keeps the persona frame: no assistant-style
/// instruction phrasing, first-person insider voice present, and the
/// aggressive register cues the validator will later demand.
pub fn validate_prompt(prompt: &str) -> PromptCheck {
    let mut issues = Vec::new();

    if prompt.contains("してください") || prompt.contains("生成して") {
        issues.push("imperative instruction phrasing");
    }

    if prompt.contains("あなたは") && prompt.contains("です") {
        issues.push("assistant role framing");
    }

    if !prompt.contains("俺は") && !prompt.contains("俺が") {
        issues.push("missing first-person persona voice");
    }

    if !prompt.contains("クソ") && !prompt.contains("バカ") {
        issues.push("missing aggressive register cues");
    }

    PromptCheck {
        is_valid: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personas_exist_for_all_categories() {
        for category in [Category::SelfHelp, Category::Business, Category::Technology] {
            let persona = Persona::for_category(category);
            assert!(!persona.character.is_empty());
            assert!(!persona.expertise.is_empty());
        }
    }

    #[test]
    fn test_category_round_trip() {
        for category in [Category::SelfHelp, Category::Business, Category::Technology] {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("cooking".parse::<Category>().is_err());
    }

    #[test]
    fn test_complete_prompt_passes_its_own_check() {
        let prompt = complete_prompt(Category::SelfHelp, false);
        let check = validate_prompt(&prompt);
        assert!(check.is_valid, "issues: {:?}", check.issues);
    }

    #[test]
    fn test_max_intensity_appends_block() {
        let base = complete_prompt(Category::Business, false);
        let max = complete_prompt(Category::Business, true);
        assert!(max.len() > base.len());
        assert!(max.contains("最大強度設定"));
        assert!(!base.contains("最大強度設定"));
    }

    #[test]
    fn test_prompt_check_flags_instruction_phrasing() {
        let check = validate_prompt("俺はライターだ。クソみたいな本を生成してください");
        assert!(!check.is_valid);
        assert!(check.issues.contains(&"imperative instruction phrasing"));
    }

    #[test]
    fn test_prompt_check_flags_role_framing() {
        let check = validate_prompt("あなたは革命的な著者です。俺が書く。クソ。");
        assert!(!check.is_valid);
        assert!(check.issues.contains(&"assistant role framing"));
    }

    #[test]
    fn test_prompt_check_flags_missing_voice_and_register() {
        let check = validate_prompt("業界の真実を書く。");
        assert!(check
            .issues
            .contains(&"missing first-person persona voice"));
        assert!(check.issues.contains(&"missing aggressive register cues"));
    }
}
