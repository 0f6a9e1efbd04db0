//! Built-in conference content used when the config leaves a section out

use chrono::{NaiveDate, NaiveTime};

use crate::dates::ImportantDate;
use crate::registration::{Fee, RegistrationTier};
use crate::schedule::{ScheduleDay, Session, SessionKind};
use crate::themes::Theme;

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn session(
    (start, end): ((u32, u32), (u32, u32)),
    title: &str,
    kind: SessionKind,
    location: &str,
    speaker: Option<&str>,
    description: &str,
) -> Session {
    Session {
        start: hm(start.0, start.1),
        end: hm(end.0, end.1),
        title: title.to_string(),
        kind,
        location: location.to_string(),
        speaker: speaker.map(str::to_string),
        description: description.to_string(),
    }
}

/// Three-day programme
pub fn schedule() -> Vec<ScheduleDay> {
    use SessionKind::*;

    vec![
        ScheduleDay {
            label: "Day 1".to_string(),
            sessions: vec![
                session(((9, 0), (9, 30)), "Registration & Welcome Coffee", Registration, "Main Lobby", None,
                    "Check-in and networking with fellow attendees"),
                session(((9, 30), (10, 30)), "Opening Ceremony", Ceremony, "Main Auditorium", Some("Prof. R.K. Dwivedi"),
                    "Welcome address and conference overview"),
                session(((10, 30), (11, 30)), "Keynote: Future of AI in Scientific Computing", Keynote, "Main Auditorium",
                    Some("Dr. Sarah Chen"), "Exploring the intersection of AI and computational science"),
                session(((11, 30), (12, 0)), "Coffee Break", Break, "Exhibition Hall", None,
                    "Networking and refreshments"),
                session(((12, 0), (13, 30)), "Technical Session 1: Machine Learning", Technical, "Hall A",
                    Some("Session Chair: Prof. Amit Verma"), "Latest research in ML algorithms and applications"),
            ],
        },
        ScheduleDay {
            label: "Day 2".to_string(),
            sessions: vec![
                session(((9, 0), (10, 0)), "Keynote: Symbolic Computation in Modern Mathematics", Keynote,
                    "Main Auditorium", Some("Prof. Rajesh Kumar"),
                    "Advanced symbolic computation techniques and applications"),
                session(((10, 0), (10, 30)), "Coffee Break", Break, "Exhibition Hall", None,
                    "Networking and refreshments"),
                session(((10, 30), (12, 0)), "Technical Session 2: Information Systems", Technical, "Hall B",
                    Some("Session Chair: Dr. Priya Sharma"), "Innovations in information technology and systems"),
                session(((12, 0), (13, 0)), "Panel Discussion: Industry Perspectives", Panel, "Main Auditorium",
                    Some("Industry Leaders"), "Insights from technology industry experts"),
            ],
        },
        ScheduleDay {
            label: "Day 3".to_string(),
            sessions: vec![
                session(((9, 0), (10, 0)), "Keynote: Quantum Computing and Future Technologies", Keynote,
                    "Main Auditorium", Some("Prof. Michael Zhang"),
                    "Exploring quantum computing and emerging technologies"),
                session(((10, 0), (10, 30)), "Coffee Break", Break, "Exhibition Hall", None,
                    "Final networking opportunity"),
                session(((10, 30), (12, 0)), "Technical Session 3: Emerging Technologies", Technical, "Hall C",
                    Some("Session Chair: Dr. Emily Watson"), "Cutting-edge research in emerging tech fields"),
                session(((12, 0), (12, 30)), "Closing Ceremony & Awards", Ceremony, "Main Auditorium",
                    Some("Organizing Committee"),
                    "Conference wrap-up and recognition of outstanding contributions"),
            ],
        },
    ]
}

fn theme(id: &str, title: &str, description: &str, details: &[&str]) -> Theme {
    Theme {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        details: details.iter().map(|d| d.to_string()).collect(),
    }
}

/// Research theme cards
pub fn themes() -> Vec<Theme> {
    vec![
        theme(
            "ai",
            "Artificial Intelligence",
            "Explore the frontiers of machine learning and neural networks",
            &[
                "Deep Learning Architectures",
                "Natural Language Processing",
                "Computer Vision Applications",
                "Reinforcement Learning",
                "AI Ethics and Explainability",
            ],
        ),
        theme(
            "symbolic",
            "Symbolic Computation",
            "Mathematical software and algorithmic problem solving",
            &[
                "Computer Algebra Systems",
                "Automated Theorem Proving",
                "Symbolic Integration",
                "Mathematical Modeling",
                "Algorithm Optimization",
            ],
        ),
        theme(
            "it",
            "Information Technology",
            "Big data, cloud computing, and emerging IT paradigms",
            &[
                "Big Data Analytics",
                "Cloud Computing Architectures",
                "Internet of Things (IoT)",
                "Cybersecurity Solutions",
                "Software Engineering Practices",
            ],
        ),
        theme(
            "emerging",
            "Emerging Technologies",
            "Blockchain, quantum computing, and future innovations",
            &[
                "Blockchain Applications",
                "Quantum Computing",
                "Edge Computing",
                "Augmented Reality",
                "5G and Beyond",
            ],
        ),
    ]
}

/// Submission and registration timeline
pub fn important_dates() -> Vec<ImportantDate> {
    let entry = |title: &str, date: NaiveDate, until: Option<NaiveDate>, description: &str| ImportantDate {
        title: title.to_string(),
        date,
        until,
        description: description.to_string(),
    };

    vec![
        entry("Paper Submission Deadline", ymd(2025, 1, 15), None,
            "Submit your research papers and abstracts"),
        entry("Notification of Acceptance", ymd(2025, 2, 10), None,
            "Authors will be notified about paper acceptance"),
        entry("Camera-Ready Submission", ymd(2025, 2, 25), None,
            "Final version of accepted papers due"),
        entry("Early Bird Registration", ymd(2025, 2, 28), None,
            "Register early for discounted rates"),
        entry("Conference Dates", ymd(2025, 3, 15), Some(ymd(2025, 3, 17)),
            "Three days of presentations and networking"),
    ]
}

/// Closing day of early-bird registration
pub fn early_bird_until() -> NaiveDate {
    ymd(2025, 2, 28)
}

/// Student, academic, industry and international categories
pub fn registration_tiers() -> Vec<RegistrationTier> {
    let tier = |name: &str, early_bird: Fee, regular: Fee, popular: bool, extras: &[&str]| {
        let mut features: Vec<String> = [
            "Access to all sessions",
            "Conference materials",
            "Lunch and refreshments",
            "Certificate of participation",
        ]
        .iter()
        .map(|f| f.to_string())
        .collect();
        features.extend(extras.iter().map(|f| f.to_string()));
        RegistrationTier {
            name: name.to_string(),
            early_bird,
            regular,
            features,
            popular,
        }
    };

    vec![
        tier("Student", Fee::inr(2500), Fee::inr(3000), false,
            &["Student networking events"]),
        tier("Academic", Fee::inr(4500), Fee::inr(5500), true,
            &["Academic networking dinner", "Proceedings (digital)"]),
        tier("Industry", Fee::inr(6500), Fee::inr(7500), false,
            &["Industry networking events", "Proceedings (digital + print)", "Exhibition access"]),
        tier("International", Fee::usd(150), Fee::usd(200), false,
            &["Welcome reception", "Proceedings (digital + print)", "Cultural tour (optional)"]),
    ]
}
