use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeSlot {
    EightAm,
    NineAm,
    TenAm,
    ElevenAm,
    Noon,
    OnePm,
    TwoPm,
    ThreePm,
    FourPm,
    FivePm,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 10] = [
        TimeSlot::EightAm,
        TimeSlot::NineAm,
        TimeSlot::TenAm,
        TimeSlot::ElevenAm,
        TimeSlot::Noon,
        TimeSlot::OnePm,
        TimeSlot::TwoPm,
        TimeSlot::ThreePm,
        TimeSlot::FourPm,
        TimeSlot::FivePm,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::EightAm => "8:00 am",
            TimeSlot::NineAm => "9:00 am",
            TimeSlot::TenAm => "10:00 am",
            TimeSlot::ElevenAm => "11:00 am",
            TimeSlot::Noon => "12:00 pm",
            TimeSlot::OnePm => "1:00 pm",
            TimeSlot::TwoPm => "2:00 pm",
            TimeSlot::ThreePm => "3:00 pm",
            TimeSlot::FourPm => "4:00 pm",
            TimeSlot::FivePm => "5:00 pm",
        }
    }

    pub fn hour(self) -> u32 {
        match self {
            TimeSlot::EightAm => 8,
            TimeSlot::NineAm => 9,
            TimeSlot::TenAm => 10,
            TimeSlot::ElevenAm => 11,
            TimeSlot::Noon => 12,
            TimeSlot::OnePm => 13,
            TimeSlot::TwoPm => 14,
            TimeSlot::ThreePm => 15,
            TimeSlot::FourPm => 16,
            TimeSlot::FivePm => 17,
        }
    }

    pub fn from_label(label: &str) -> Option<TimeSlot> {
        TimeSlot::ALL.into_iter().find(|slot| slot.label() == label)
    }

    pub fn next(self) -> TimeSlot {
        TimeSlot::ALL[(self.index() + 1) % TimeSlot::ALL.len()]
    }

    pub fn prev(self) -> TimeSlot {
        TimeSlot::ALL[(self.index() + TimeSlot::ALL.len() - 1) % TimeSlot::ALL.len()]
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn clock_label_hour(label: &str) -> Option<u32> {
    let (time_part, meridiem) = label.trim().rsplit_once(' ')?;
    let hour_text = time_part.split(':').next()?;
    let hour: u32 = hour_text.parse().ok()?;

    if hour == 0 || hour > 12 {
        return None;
    }

    match meridiem {
        "am" => Some(if hour == 12 { 0 } else { hour }),
        "pm" => Some(if hour == 12 { 12 } else { hour + 12 }),
        _ => None,
    }
}
