mod data;
mod passage;
mod set;
mod words;

pub use self::data::PhonicsData;
pub use self::passage::FluencyPassage;
pub use self::set::PhonicsSet;
pub use self::words::PracticeWords;
