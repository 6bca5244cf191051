use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
    pub years_experience: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub duration_minutes: u32,
    pub price: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author: &'static str,
    pub rating: u32,
    pub text: &'static str,
}

// The shop's fixed catalog. Compiled in; editing it means shipping a new build,
// which is how the website content is managed as well.
pub const BARBERS: &[Barber] = &[
    Barber {
        id: "1",
        name: "Marco Ricci",
        specialty: "Classic cuts and hot towel shaves",
        years_experience: 14,
    },
    Barber {
        id: "2",
        name: "Deniz Kaya",
        specialty: "Skin fades and beard sculpting",
        years_experience: 8,
    },
    Barber {
        id: "3",
        name: "Tomás Silva",
        specialty: "Long hair and scissor work",
        years_experience: 11,
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        id: "classic-haircut",
        name: "Classic Haircut",
        duration_minutes: 30,
        price: "25",
        description: "Scissor or clipper cut, washed and styled.",
    },
    Service {
        id: "beard-trim",
        name: "Beard Trim",
        duration_minutes: 30,
        price: "15",
        description: "Shape-up with razor edges and beard oil.",
    },
    Service {
        id: "hot-towel-shave",
        name: "Hot Towel Shave",
        duration_minutes: 30,
        price: "30",
        description: "Traditional straight-razor shave with hot towels.",
    },
    Service {
        id: "cut-and-beard",
        name: "Haircut & Beard Combo",
        duration_minutes: 60,
        price: "35",
        description: "Full haircut plus beard trim in one sitting.",
    },
];

pub const REVIEWS: &[Review] = &[
    Review {
        author: "Jonas",
        rating: 5,
        text: "Best fade I've had in years. Booking online took a minute.",
    },
    Review {
        author: "Pavel",
        rating: 5,
        text: "Marco remembers how I like my cut. Feels like a neighborhood shop should.",
    },
    Review {
        author: "Sofia",
        rating: 4,
        text: "Great beard trim, slightly long wait on a Saturday.",
    },
];
