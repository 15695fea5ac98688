//! Static FAQ shown below the generator.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const TITLE: &str = "Frequently Asked Questions";

pub const ENTRIES: [FaqEntry; 7] = [
    FaqEntry {
        question: "What is a password generator?",
        answer: "A password generator is a tool that creates unique and random passwords based on \
                 security recommendations. The best password generators are the ones that allow you \
                 to customize settings according to your requirements. This tool has plenty of \
                 options for the best result.",
    },
    FaqEntry {
        question: "Is this generator safe to use?",
        answer: "Passwords generated are not stored or shared anywhere else since they are created \
                 locally on your computer. Remember not to leave the terminal unattended once you're \
                 done creating and copying your password.",
    },
    FaqEntry {
        question: "What are the requirements for a strong password?",
        answer: "A strong password is one that is hard to crack. It needs to be as random as \
                 possible and have more than eight characters. Also, it must include a combination \
                 of upper and lower cases or be a mixture of symbols and a passphrase.",
    },
    FaqEntry {
        question: "What passwords should not be used?",
        answer: "Passwords that you've used before, passwords that are the same as your username, \
                 anything that includes personal information, words from a dictionary, common \
                 phrases, popular passwords like password, 123456, qwerty, abc123, iloveyou, 111111, \
                 and so on, anything shorter than 12 characters.",
    },
    FaqEntry {
        question: "How long should my password be?",
        answer: "Your passwords should be at least 12 characters long. However, the longer the \
                 password is, the better.",
    },
    FaqEntry {
        question: "Do I need a unique password for every account?",
        answer: "Yes! Using the same password across multiple accounts is a huge no-no. If hackers \
                 learn the password to one of your accounts, they'll have your password for all the \
                 others, too.",
    },
    FaqEntry {
        question: "Can a strong password be hacked?",
        answer: "Creating completely uncrackable passwords is becoming a challenge. But you can \
                 stand a better chance against hackers by avoiding bad password practices. They \
                 include reusing passwords for different accounts, common keyword patterns (such as \
                 qwerty), common acronyms (such as ymca), or repeating characters (such as zzz111).",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_filled_in() {
        assert_eq!(ENTRIES.len(), 7);
        for entry in ENTRIES {
            assert!(entry.question.ends_with('?'));
            assert!(!entry.answer.is_empty());
            assert!(!entry.answer.contains("  "), "{}", entry.question);
        }
    }
}
