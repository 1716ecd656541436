use serde::{Deserialize, Serialize};

/// The seven fixed day keys, in calendar order Monday through Sunday.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mon" | "monday" => Some(Weekday::Monday),
            "tue" | "tuesday" => Some(Weekday::Tuesday),
            "wed" | "wednesday" => Some(Weekday::Wednesday),
            "thu" | "thursday" => Some(Weekday::Thursday),
            "fri" | "friday" => Some(Weekday::Friday),
            "sat" | "saturday" => Some(Weekday::Saturday),
            "sun" | "sunday" => Some(Weekday::Sunday),
            _ => None,
        }
    }
}

/// Studied minutes per weekday. One field per day so the stored JSON keeps
/// the seven lowercase day keys.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DayMinutes {
    pub monday: u32,
    pub tuesday: u32,
    pub wednesday: u32,
    pub thursday: u32,
    pub friday: u32,
    pub saturday: u32,
    pub sunday: u32,
}

impl DayMinutes {
    pub fn get(&self, day: Weekday) -> u32 {
        match day {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
            Weekday::Saturday => self.saturday,
            Weekday::Sunday => self.sunday,
        }
    }

    pub fn add(&mut self, day: Weekday, minutes: u32) {
        let slot = match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        };
        *slot += minutes;
    }

    pub fn total(&self) -> u32 {
        Weekday::ALL.iter().map(|day| self.get(*day)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Weekday::from_str("mon"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_str("Wednesday"), Some(Weekday::Wednesday));
        assert_eq!(Weekday::from_str("SUN"), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_str("someday"), None);
    }

    #[test]
    fn test_total_sums_all_days() {
        let mut minutes = DayMinutes::default();
        assert_eq!(minutes.total(), 0);

        minutes.add(Weekday::Monday, 30);
        minutes.add(Weekday::Friday, 60);
        minutes.add(Weekday::Sunday, 30);
        assert_eq!(minutes.total(), 120);
        assert_eq!(minutes.get(Weekday::Friday), 60);
        assert_eq!(minutes.get(Weekday::Tuesday), 0);
    }
}
