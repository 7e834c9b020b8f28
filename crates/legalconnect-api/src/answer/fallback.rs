//! Offline answers served when the live answer source is unavailable.
//!
//! Topics are matched by keyword against the lower-cased question, first
//! match wins. Definitions and explanations exist in English and Urdu;
//! article and case citations are kept in English.

use legalconnect_types::api::{ConstitutionalArticle, SupremeCourtCase};
use legalconnect_types::models::Language;

use super::GeneratedAnswer;

struct Texts {
    definition: &'static str,
    explanation: &'static str,
}

struct Topic {
    keywords: &'static [&'static str],
    specialization: &'static str,
    en: Texts,
    ur: Texts,
    articles: &'static [(&'static str, &'static str, &'static str)],
    cases: &'static [(&'static str, &'static str)],
    follow_ups: &'static [&'static str],
}

const TOPICS: &[Topic] = &[
    Topic {
        keywords: &["arrest", "warrant", "police", "detain", "گرفتار", "وارنٹ", "پولیس"],
        specialization: "Criminal Law",
        en: Texts {
            definition: "An arrest without a warrant is the taking of a person into custody by the police without a prior order from a magistrate.",
            explanation: "Under Section 54 of the Code of Criminal Procedure, 1898, police may arrest without a warrant for cognizable offences. Article 10 of the Constitution still requires that the arrested person be told the grounds of arrest, be allowed to consult a lawyer of their choice, and be produced before a magistrate within 24 hours.",
        },
        ur: Texts {
            definition: "بغیر وارنٹ گرفتاری سے مراد یہ ہے کہ پولیس مجسٹریٹ کے حکم کے بغیر کسی شخص کو حراست میں لے۔",
            explanation: "ضابطہ فوجداری 1898 کی دفعہ 54 کے تحت پولیس قابلِ دست اندازی جرائم میں بغیر وارنٹ گرفتار کر سکتی ہے۔ آئین کے آرٹیکل 10 کے مطابق گرفتار شخص کو گرفتاری کی وجوہات بتانا، اپنی پسند کے وکیل سے مشورے کا حق دینا اور 24 گھنٹے کے اندر مجسٹریٹ کے سامنے پیش کرنا لازم ہے۔",
        },
        articles: &[
            ("9", "Security of person", "No person shall be deprived of life or liberty save in accordance with law."),
            ("10", "Safeguards as to arrest and detention", "An arrested person must be informed of the grounds of arrest, may consult a legal practitioner, and must be produced before a magistrate within 24 hours."),
            ("10A", "Right to fair trial", "Every person is entitled to a fair trial and due process in the determination of civil rights or a criminal charge."),
        ],
        cases: &[],
        follow_ups: &[
            "How do I apply for bail after arrest?",
            "What should I do if the police refuse to register an FIR?",
            "Can the police keep me in custody for more than 24 hours?",
        ],
    },
    Topic {
        keywords: &["cyber", "online", "hack", "fia", "social media", "blackmail", "peca", "سائبر", "آن لائن"],
        specialization: "Cyber Law",
        en: Texts {
            definition: "Cybercrime covers offences committed through information systems, such as unauthorised access, online harassment, identity theft and electronic fraud.",
            explanation: "The Prevention of Electronic Crimes Act, 2016 (PECA) defines cyber offences. Complaints are filed with the FIA Cyber Crime Wing, online or at a regional office, with screenshots, links and other evidence preserved.",
        },
        ur: Texts {
            definition: "سائبر کرائم سے مراد وہ جرائم ہیں جو کمپیوٹر یا انٹرنیٹ کے ذریعے کیے جائیں، جیسے غیر مجاز رسائی، آن لائن ہراسانی، شناخت کی چوری اور الیکٹرانک فراڈ۔",
            explanation: "الیکٹرانک جرائم کی روک تھام کا ایکٹ 2016 (پیکا) ان جرائم کی تعریف کرتا ہے۔ شکایت ایف آئی اے سائبر کرائم ونگ کے پاس آن لائن یا علاقائی دفتر میں درج کرائی جاتی ہے، اور اسکرین شاٹس اور لنکس بطور ثبوت محفوظ رکھنے چاہئیں۔",
        },
        articles: &[
            ("14", "Inviolability of dignity of man, etc.", "The dignity of man and, subject to law, the privacy of home shall be inviolable."),
            ("19", "Freedom of speech, etc.", "Every citizen has the right to freedom of speech and expression, subject to reasonable restrictions imposed by law."),
        ],
        cases: &[],
        follow_ups: &[
            "What evidence do I need for an FIA cybercrime complaint?",
            "Is sharing someone's private photos a crime in Pakistan?",
            "How long does the FIA take to act on a complaint?",
        ],
    },
    Topic {
        keywords: &["dowry", "jahez", "bridal gift", "جہیز"],
        specialization: "Family Law",
        en: Texts {
            definition: "Dowry is property given to the bride by her parents in connection with marriage.",
            explanation: "The Dowry and Bridal Gifts (Restriction) Act, 1976 limits the value of dowry and bridal gifts, makes them the absolute property of the wife, and bars demanding dowry. Dowry articles can be recovered through the Family Court.",
        },
        ur: Texts {
            definition: "جہیز وہ مال ہے جو شادی کے موقع پر دلہن کو اس کے والدین کی طرف سے دیا جاتا ہے۔",
            explanation: "جہیز اور دلہن کے تحائف (پابندی) ایکٹ 1976 جہیز کی مالیت محدود کرتا ہے، اسے بیوی کی مکمل ملکیت قرار دیتا ہے اور جہیز کے مطالبے کو ممنوع قرار دیتا ہے۔ جہیز کا سامان فیملی کورٹ کے ذریعے واپس لیا جا سکتا ہے۔",
        },
        articles: &[
            ("25", "Equality of citizens", "All citizens are equal before law, and there shall be no discrimination on the basis of sex."),
            ("35", "Protection of family, etc.", "The State shall protect the marriage, the family, the mother and the child."),
        ],
        cases: &[],
        follow_ups: &[
            "How can I recover my dowry articles after divorce?",
            "Is demanding dowry a punishable offence?",
        ],
    },
    Topic {
        keywords: &["divorce", "khula", "talaq", "nikah", "marriage", "maintenance", "guardian", "طلاق", "خلع", "نکاح", "شادی"],
        specialization: "Family Law",
        en: Texts {
            definition: "Family law governs marriage, divorce, maintenance, and the custody and guardianship of children.",
            explanation: "The Muslim Family Laws Ordinance, 1961 requires a husband pronouncing talaq to give written notice to the Union Council chairman; it takes effect 90 days later. A wife may seek khula or dissolution through the Family Court under the Family Courts Act, 1964.",
        },
        ur: Texts {
            definition: "عائلی قانون شادی، طلاق، نان نفقہ اور بچوں کی حوالگی و سرپرستی سے متعلق قانون ہے۔",
            explanation: "مسلم عائلی قوانین آرڈیننس 1961 کے تحت طلاق دینے والے شوہر کو یونین کونسل کے چیئرمین کو تحریری نوٹس دینا ہوتا ہے اور طلاق 90 دن بعد مؤثر ہوتی ہے۔ بیوی فیملی کورٹس ایکٹ 1964 کے تحت فیملی کورٹ سے خلع یا تنسیخِ نکاح حاصل کر سکتی ہے۔",
        },
        articles: &[
            ("35", "Protection of family, etc.", "The State shall protect the marriage, the family, the mother and the child."),
        ],
        cases: &[
            ("Khurshid Bibi v. Muhammad Amin (PLD 1967 SC 97)", "Recognised a wife's right to khula where she cannot live with her husband within the limits prescribed by God."),
        ],
        follow_ups: &[
            "How long does a khula case take in the Family Court?",
            "Who gets custody of children after divorce?",
            "How is maintenance for a wife and children decided?",
        ],
    },
    Topic {
        keywords: &["women", "woman", "harassment", "inheritance", "wife", "خواتین", "عورت", "ہراس"],
        specialization: "Women's Rights",
        en: Texts {
            definition: "Women's rights are the legal protections guaranteeing women equality, dignity, and freedom from discrimination and violence.",
            explanation: "The Constitution guarantees equality before law and allows special measures for women. Statutes such as the Protection against Harassment of Women at the Workplace Act, 2010 and provincial domestic violence laws give women specific remedies.",
        },
        ur: Texts {
            definition: "خواتین کے حقوق سے مراد وہ قانونی تحفظات ہیں جو خواتین کو برابری، عزت اور امتیاز و تشدد سے آزادی کی ضمانت دیتے ہیں۔",
            explanation: "آئین قانون کے سامنے برابری کی ضمانت دیتا ہے اور خواتین کے لیے خصوصی اقدامات کی اجازت دیتا ہے۔ کام کی جگہ پر خواتین کو ہراساں کرنے کے خلاف تحفظ کا ایکٹ 2010 اور صوبائی گھریلو تشدد کے قوانین خواتین کو مخصوص داد رسی فراہم کرتے ہیں۔",
        },
        articles: &[
            ("25", "Equality of citizens", "All citizens are equal before law; nothing prevents the State from making special provision for the protection of women and children."),
            ("34", "Full participation of women in national life", "Steps shall be taken to ensure full participation of women in all spheres of national life."),
        ],
        cases: &[
            ("Hafiz Abdul Waheed v. Mrs. Asma Jahangir (PLD 2004 SC 219)", "Held that an adult Muslim woman may contract a valid marriage without the consent of her guardian."),
            ("Shehla Zia v. WAPDA (PLD 1994 SC 693)", "Read the right to life under Article 9 broadly to include a dignified and healthy life."),
        ],
        follow_ups: &[
            "How do I file a workplace harassment complaint?",
            "What are a daughter's inheritance rights?",
            "What protection exists against domestic violence?",
        ],
    },
];

static GENERAL: Topic = Topic {
    keywords: &[],
    specialization: "Constitutional Law",
    en: Texts {
        definition: "Pakistani law is based on the Constitution of 1973, federal and provincial statutes, and the judgments of the superior courts.",
        explanation: "Live legal analysis is unavailable right now, so this is general guidance. Fundamental rights are set out in Articles 8 to 28 of the Constitution and can be enforced through the High Courts. For your specific situation, please consult a qualified lawyer.",
    },
    ur: Texts {
        definition: "پاکستان کا قانون 1973 کے آئین، وفاقی و صوبائی قوانین اور اعلیٰ عدالتوں کے فیصلوں پر مبنی ہے۔",
        explanation: "اس وقت تفصیلی قانونی تجزیہ دستیاب نہیں، اس لیے یہ عمومی رہنمائی ہے۔ بنیادی حقوق آئین کے آرٹیکل 8 تا 28 میں درج ہیں اور ہائی کورٹس کے ذریعے نافذ کرائے جا سکتے ہیں۔ اپنی مخصوص صورتحال کے لیے کسی مستند وکیل سے رجوع کریں۔",
    },
    articles: &[
        ("4", "Right of individuals to be dealt with in accordance with law, etc.", "Every citizen has the inalienable right to be treated in accordance with law."),
        ("199", "Jurisdiction of High Court", "High Courts may issue orders to enforce fundamental rights."),
    ],
    cases: &[],
    follow_ups: &[
        "Can police arrest without a warrant?",
        "What does the Constitution say about women's rights?",
        "How can I file a cybercrime complaint?",
        "What are dowry laws in Pakistan?",
    ],
};

/// Build an offline answer for `question`.
pub fn answer(question: &str, language: Language) -> GeneratedAnswer {
    let topic = match_topic(question);
    let texts = match language {
        Language::En => &topic.en,
        Language::Ur => &topic.ur,
    };

    GeneratedAnswer {
        definition: texts.definition.to_string(),
        explanation: texts.explanation.to_string(),
        constitutional_articles: topic
            .articles
            .iter()
            .map(|(article, title, summary)| ConstitutionalArticle {
                article: article.to_string(),
                title: title.to_string(),
                summary: summary.to_string(),
            })
            .collect(),
        supreme_court_cases: topic
            .cases
            .iter()
            .map(|(title, summary)| SupremeCourtCase {
                title: title.to_string(),
                summary: summary.to_string(),
            })
            .collect(),
        follow_up_questions: topic.follow_ups.iter().map(|q| q.to_string()).collect(),
        specialization: Some(topic.specialization.to_string()),
    }
}

fn match_topic(question: &str) -> &'static Topic {
    let lowered = question.to_lowercase();
    TOPICS
        .iter()
        .find(|t| t.keywords.iter().any(|k| lowered.contains(k)))
        .unwrap_or(&GENERAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggested_questions_hit_their_topics() {
        let cases = [
            ("Can police arrest without a warrant?", "Criminal Law"),
            ("What does the Constitution say about women's rights?", "Women's Rights"),
            ("How can I file a cybercrime complaint?", "Cyber Law"),
            ("What are dowry laws in Pakistan?", "Family Law"),
            ("How does KHULA work?", "Family Law"),
        ];
        for (question, expected) in cases {
            let got = answer(question, Language::En);
            assert_eq!(got.specialization.as_deref(), Some(expected), "{question}");
        }
    }

    #[test]
    fn unknown_question_gets_general_guidance() {
        let got = answer("Tell me about maritime salvage", Language::En);
        assert_eq!(got.specialization.as_deref(), Some("Constitutional Law"));
        assert!(!got.follow_up_questions.is_empty());
    }

    #[test]
    fn urdu_question_gets_urdu_text() {
        let got = answer("کیا پولیس بغیر وارنٹ گرفتار کر سکتی ہے؟", Language::Ur);
        assert_eq!(got.specialization.as_deref(), Some("Criminal Law"));
        assert!(got.definition.contains("وارنٹ"));
        assert!(got.constitutional_articles.iter().any(|a| a.article == "10"));
    }

    #[test]
    fn language_selects_text_not_topic() {
        let en = answer("What is khula?", Language::En);
        let ur = answer("What is khula?", Language::Ur);
        assert_eq!(en.specialization, ur.specialization);
        assert_ne!(en.definition, ur.definition);
        assert_eq!(en.constitutional_articles, ur.constitutional_articles);
    }
}
