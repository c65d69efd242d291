// src/services/keyword_table.rs
//
// Canned festival answers used when the completion service is unavailable.

#[derive(Debug)]
pub struct KeywordRule {
    pub topic: &'static str,
    pub patterns: &'static [&'static str],
    pub reply: &'static str,
}

impl KeywordRule {
    /// `lowered` must already be lowercase.
    fn matches(&self, lowered: &str) -> bool {
        self.patterns.iter().any(|p| lowered.contains(*p))
    }
}

pub const DEFAULT_REPLY: &str = "🎊 Welcome to the Smart Festival Guide chatbot! I can tell you about Spring Festival, Dragon Boat Festival, and Mid-Autumn Festival - including their origins, customs, and traditions. Try asking me about any traditional Chinese festival! 新年快乐 (Happy New Year)!";

// First match wins. "春节 红包" answers with the Spring Festival entry.
pub static RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: "spring_festival",
        patterns: &["春节", "chinese new year", "spring festival"],
        reply: "🧧 春节快乐！Chinese New Year, also known as Spring Festival (春节), is the most important traditional holiday in Chinese culture. It marks the beginning of the lunar new year and is celebrated with family reunions, feasts, fireworks, and the giving of red envelopes (红包).",
    },
    KeywordRule {
        topic: "red_envelope",
        patterns: &["红包", "red envelope", "hongbao"],
        reply: "🧧 红包 (Hongbao) are red envelopes containing money given as gifts during Chinese New Year. The red color symbolizes good luck and is believed to ward off evil spirits. They're traditionally given by married couples and elders to children and unmarried adults.",
    },
    KeywordRule {
        topic: "zodiac",
        patterns: &["生肖", "zodiac", "animal"],
        reply: "🐉 The Chinese zodiac consists of 12 animals: Rat, Ox, Tiger, Rabbit, Dragon, Snake, Horse, Goat, Monkey, Rooster, Dog, and Pig. Each year is associated with one of these animals, and 2024 is the Year of the Dragon! Dragons symbolize strength, wisdom, and good fortune.",
    },
    KeywordRule {
        topic: "food",
        patterns: &["饺子", "dumpling", "food"],
        reply: "🥟 Traditional Chinese New Year foods include dumplings (饺子), fish (鱼), spring rolls, nian gao (年糕 - sticky rice cake), and tangerines. Each food has symbolic meaning - dumplings represent wealth, fish represents abundance, and tangerines represent good luck!",
    },
    KeywordRule {
        topic: "dragon_lion_dance",
        patterns: &["舞龙", "dragon dance", "lion dance"],
        reply: "🐲 Dragon and Lion dances are traditional performances during Chinese New Year celebrations. The dragon dance involves a team of performers manipulating a long, flexible dragon figure, while lion dances feature acrobatic movements. Both are believed to bring good luck and chase away evil spirits!",
    },
    KeywordRule {
        topic: "fireworks",
        patterns: &["烟花", "firework", "firecracker"],
        reply: "🎆 Fireworks and firecrackers are an essential part of Chinese New Year celebrations! The loud noises and bright lights are believed to scare away the mythical beast Nian (年兽) and evil spirits, bringing good luck for the new year.",
    },
    KeywordRule {
        topic: "traditions",
        patterns: &["传统", "tradition", "custom"],
        reply: "🏮 Chinese New Year traditions include cleaning the house before the new year, decorating with red lanterns and couplets, family reunion dinners, giving red envelopes, watching dragon dances, and setting off fireworks. The celebration lasts for 15 days, ending with the Lantern Festival!",
    },
    KeywordRule {
        topic: "dragon_boat",
        patterns: &["龙舟", "dragon boat", "boat festival"],
        reply: "🐉 The Dragon Boat Festival (端午节) is celebrated on the 5th day of the 5th lunar month. It commemorates the death of the poet Qu Yuan. Traditional activities include dragon boat racing, eating zongzi (sticky rice dumplings), and hanging mugwort leaves for protection.",
    },
    KeywordRule {
        topic: "mid_autumn",
        patterns: &["中秋", "mid-autumn", "moon festival"],
        reply: "🥮 The Mid-Autumn Festival (中秋节) is celebrated on the 15th day of the 8th lunar month when the moon is fullest. Families gather to admire the moon, share mooncakes, and enjoy lantern festivals. It symbolizes reunion, harmony, and prosperity.",
    },
];

/// First rule whose patterns appear in `text`, if any.
pub fn match_rule(text: &str) -> Option<&'static KeywordRule> {
    let lowered = text.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&lowered))
}

/// Total lookup: never fails, falls back to [`DEFAULT_REPLY`].
pub fn lookup(text: &str) -> &'static str {
    match_rule(text).map_or(DEFAULT_REPLY, |rule| rule.reply)
}
