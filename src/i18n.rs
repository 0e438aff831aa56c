//! Bengali/English label tables.
//!
//! Every piece of user-visible text is looked up through [`tr`], so toggling
//! [`Language`] re-renders the whole UI on the next `view` pass.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Bn,
    En,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Bn => Language::En,
            Language::En => Language::Bn,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Bn => "bn",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "bn" => Some(Language::Bn),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Caption of the language switch: it names the language you switch *to*.
    pub fn switch_caption(self) -> &'static str {
        match self {
            Language::Bn => "EN",
            Language::En => "বাং",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Title,
    ScriptLabel,
    UploadText,
    UploadPlaceholder,
    SettingsTitle,
    SpeedLabel,
    FontSizeLabel,
    LineSpacingLabel,
    MarginLabel,
    AlignLabel,
    AlignLeft,
    AlignCenter,
    AlignRight,
    MirrorLabel,
    TodoLabel,
    Todo1,
    Todo2,
    Todo3,
    Todo4,
    StartBtn,
    GoBackText,
    ScriptPlaceholder,
    DefaultScript,
    FileProcessing,
    FileSuccess,
    FileError,
    FileTypeError,
    StorageError,
    DevelopedBy,
}

#[cfg(test)]
impl Label {
    pub const ALL: [Label; 29] = [
        Label::Title,
        Label::ScriptLabel,
        Label::UploadText,
        Label::UploadPlaceholder,
        Label::SettingsTitle,
        Label::SpeedLabel,
        Label::FontSizeLabel,
        Label::LineSpacingLabel,
        Label::MarginLabel,
        Label::AlignLabel,
        Label::AlignLeft,
        Label::AlignCenter,
        Label::AlignRight,
        Label::MirrorLabel,
        Label::TodoLabel,
        Label::Todo1,
        Label::Todo2,
        Label::Todo3,
        Label::Todo4,
        Label::StartBtn,
        Label::GoBackText,
        Label::ScriptPlaceholder,
        Label::DefaultScript,
        Label::FileProcessing,
        Label::FileSuccess,
        Label::FileError,
        Label::FileTypeError,
        Label::StorageError,
        Label::DevelopedBy,
    ];
}

/// Look up the text for `label` in `lang`.
pub fn tr(lang: Language, label: Label) -> &'static str {
    match lang {
        Language::Bn => bn(label),
        Language::En => en(label),
    }
}

/// Every label rendered in `lang`, in declaration order.
#[cfg(test)]
fn label_set(lang: Language) -> Vec<(Label, &'static str)> {
    Label::ALL
        .iter()
        .map(|label| (*label, tr(lang, *label)))
        .collect()
}

fn bn(label: Label) -> &'static str {
    match label {
        Label::Title => "টেলিপ্রম্পটার",
        Label::ScriptLabel => "আপনার স্ক্রিপ্ট",
        Label::UploadText => "ফাইল আপলোড",
        Label::UploadPlaceholder => "PDF বা DOCX ফাইলের পাথ...",
        Label::SettingsTitle => "সেটিংস",
        Label::SpeedLabel => "স্ক্রোল গতি",
        Label::FontSizeLabel => "ফন্টের আকার",
        Label::LineSpacingLabel => "লাইনের ব্যবধান",
        Label::MarginLabel => "পাশের মার্জিন",
        Label::AlignLabel => "টেক্সট অ্যালাইনমেন্ট",
        Label::AlignLeft => "বাম",
        Label::AlignCenter => "মাঝে",
        Label::AlignRight => "ডান",
        Label::MirrorLabel => "আয়না টেক্সট",
        Label::TodoLabel => "টুডু তালিকা",
        Label::Todo1 => "স্ক্রিপ্ট প্রস্তুত করুন",
        Label::Todo2 => "গতি সেট করুন",
        Label::Todo3 => "ফন্ট সাইজ সামঞ্জস্য করুন",
        Label::Todo4 => "টেলিপ্রম্পটার টেস্ট করুন",
        Label::StartBtn => "টেলিপ্রম্পটার শুরু করুন",
        Label::GoBackText => "ফিরে যান",
        Label::ScriptPlaceholder => "আপনার স্ক্রিপ্ট এখানে পেস্ট করুন...",
        Label::DefaultScript => {
            "আপনার উন্নত টেলিপ্রম্পটারে স্বাগতম!\n\nশুরু করতে এই টেক্সটটি আপনার নিজের স্ক্রিপ্ট দিয়ে প্রতিস্থাপন করুন।\n\nডানদিকের সেটিংস ব্যবহার করে গতি, ফন্টের আকার এবং আরও অনেক কিছু সামঞ্জস্য করুন।"
        }
        Label::FileProcessing => "ফাইল প্রক্রিয়াকরণ হচ্ছে...",
        Label::FileSuccess => "ফাইল সফলভাবে লোড হয়েছে!",
        Label::FileError => "ত্রুটি: ফাইল পড়তে পারছি না",
        Label::FileTypeError => "শুধুমাত্র PDF এবং DOCX ফাইল সমর্থিত",
        Label::StorageError => "ত্রুটি: সেটিংস সংরক্ষণ করা যায়নি",
        Label::DevelopedBy => "ডেভেলপড বাই",
    }
}

fn en(label: Label) -> &'static str {
    match label {
        Label::Title => "Teleprompter",
        Label::ScriptLabel => "Your Script",
        Label::UploadText => "Upload File",
        Label::UploadPlaceholder => "Path to a PDF or DOCX file...",
        Label::SettingsTitle => "Settings",
        Label::SpeedLabel => "Scroll Speed",
        Label::FontSizeLabel => "Font Size",
        Label::LineSpacingLabel => "Line Spacing",
        Label::MarginLabel => "Side Margin",
        Label::AlignLabel => "Text Alignment",
        Label::AlignLeft => "Left",
        Label::AlignCenter => "Center",
        Label::AlignRight => "Right",
        Label::MirrorLabel => "Mirror Text",
        Label::TodoLabel => "Todo List",
        Label::Todo1 => "Prepare your script",
        Label::Todo2 => "Set the speed",
        Label::Todo3 => "Adjust font size",
        Label::Todo4 => "Test teleprompter",
        Label::StartBtn => "Start Teleprompter",
        Label::GoBackText => "Go Back",
        Label::ScriptPlaceholder => "Paste your script here...",
        Label::DefaultScript => {
            "Welcome to your advanced Teleprompter!\n\nTo get started, replace this text with your own script.\n\nUse the settings on the right to adjust speed, font size, and more."
        }
        Label::FileProcessing => "Processing file...",
        Label::FileSuccess => "File loaded successfully!",
        Label::FileError => "Error: Could not read file",
        Label::FileTypeError => "Only PDF and DOCX files are supported",
        Label::StorageError => "Error: Could not save settings",
        Label::DevelopedBy => "Developed by",
    }
}
