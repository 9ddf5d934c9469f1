use crate::country::{AdventureLevel, Coordinates, Country, Region, TravelerType};
use crate::destination::{DailyBudget, Destination};

use crate::country::TravelerType::{Business, Couple, Family, Friends, Solo};

const ALL: &[TravelerType] = &[Solo, Couple, Family, Friends, Business];
const LEISURE: &[TravelerType] = &[Solo, Couple, Family, Friends];
const GROUPS: &[TravelerType] = &[Couple, Family, Friends];
const CITY: &[TravelerType] = &[Solo, Family, Friends, Business];
const SAFARI: &[TravelerType] = &[Couple, Family, Friends];
const COUPLE: &[TravelerType] = &[Couple];
const COUPLE_FAMILY: &[TravelerType] = &[Couple, Family];
const COUPLE_FAMILY_BUSINESS: &[TravelerType] = &[Couple, Family, Business];
const SOLO_COUPLE_FRIENDS: &[TravelerType] = &[Solo, Couple, Friends];
const SOLO_COUPLE_FAMILY: &[TravelerType] = &[Solo, Couple, Family];
const SOLO_FRIENDS: &[TravelerType] = &[Solo, Friends];
const SOLO_FRIENDS_BUSINESS: &[TravelerType] = &[Solo, Friends, Business];
const FAMILY_FRIENDS_SOLO: &[TravelerType] = &[Family, Friends, Solo];
const FAMILY_BUSINESS_SOLO: &[TravelerType] = &[Family, Business, Solo];

static COUNTRIES: &[Country] = &[
    Country {
        code: "FR",
        name: "France",
        coordinates: Coordinates::new(46.2276, 2.2137),
        adventure_level: AdventureLevel::Casual,
        traveler_types: ALL,
        popularity: 10,
        region: Region::Europe,
        description: "Museums, vineyards and Alpine villages wrapped around the world's most visited capital.",
        capital: "Paris",
        currency: "EUR",
        languages: &["French"],
    },
    Country {
        code: "IT",
        name: "Italy",
        coordinates: Coordinates::new(41.8719, 12.5674),
        adventure_level: AdventureLevel::Casual,
        traveler_types: LEISURE,
        popularity: 10,
        region: Region::Europe,
        description: "Renaissance cities, coastal drives and the food everyone else copies.",
        capital: "Rome",
        currency: "EUR",
        languages: &["Italian"],
    },
    Country {
        code: "ES",
        name: "Spain",
        coordinates: Coordinates::new(40.4637, -3.7492),
        adventure_level: AdventureLevel::Casual,
        traveler_types: ALL,
        popularity: 9,
        region: Region::Europe,
        description: "Late dinners, Moorish palaces and long Mediterranean beaches.",
        capital: "Madrid",
        currency: "EUR",
        languages: &["Spanish"],
    },
    Country {
        code: "GR",
        name: "Greece",
        coordinates: Coordinates::new(39.0742, 21.8243),
        adventure_level: AdventureLevel::Casual,
        traveler_types: GROUPS,
        popularity: 8,
        region: Region::Europe,
        description: "Whitewashed islands, ancient ruins and slow ferry hops.",
        capital: "Athens",
        currency: "EUR",
        languages: &["Greek"],
    },
    Country {
        code: "PT",
        name: "Portugal",
        coordinates: Coordinates::new(39.3999, -8.2245),
        adventure_level: AdventureLevel::Casual,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 8,
        region: Region::Europe,
        description: "Tiled hill towns, Atlantic surf and port cellars.",
        capital: "Lisbon",
        currency: "EUR",
        languages: &["Portuguese"],
    },
    Country {
        code: "IS",
        name: "Iceland",
        coordinates: Coordinates::new(64.9631, -19.0208),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 7,
        region: Region::Europe,
        description: "Glaciers, geysers and the northern lights over black-sand beaches.",
        capital: "Reykjavik",
        currency: "ISK",
        languages: &["Icelandic"],
    },
    Country {
        code: "NO",
        name: "Norway",
        coordinates: Coordinates::new(60.472, 8.4689),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_COUPLE_FAMILY,
        popularity: 6,
        region: Region::Europe,
        description: "Fjords, midnight sun and some of the best hiking huts in Europe.",
        capital: "Oslo",
        currency: "NOK",
        languages: &["Norwegian"],
    },
    Country {
        code: "CH",
        name: "Switzerland",
        coordinates: Coordinates::new(46.8182, 8.2275),
        adventure_level: AdventureLevel::Casual,
        traveler_types: COUPLE_FAMILY_BUSINESS,
        popularity: 7,
        region: Region::Europe,
        description: "Punctual trains through postcard Alpine scenery.",
        capital: "Bern",
        currency: "CHF",
        languages: &["German", "French", "Italian", "Romansh"],
    },
    Country {
        code: "HR",
        name: "Croatia",
        coordinates: Coordinates::new(45.1, 15.2),
        adventure_level: AdventureLevel::Casual,
        traveler_types: GROUPS,
        popularity: 6,
        region: Region::Europe,
        description: "Walled Adriatic towns and island-hopping by sailboat.",
        capital: "Zagreb",
        currency: "EUR",
        languages: &["Croatian"],
    },
    Country {
        code: "GB",
        name: "United Kingdom",
        coordinates: Coordinates::new(55.3781, -3.436),
        adventure_level: AdventureLevel::Casual,
        traveler_types: CITY,
        popularity: 9,
        region: Region::Europe,
        description: "Castles, pubs and world-class museums that are mostly free.",
        capital: "London",
        currency: "GBP",
        languages: &["English"],
    },
    Country {
        code: "JP",
        name: "Japan",
        coordinates: Coordinates::new(36.2048, 138.2529),
        adventure_level: AdventureLevel::Casual,
        traveler_types: ALL,
        popularity: 10,
        region: Region::Asia,
        description: "Temples, bullet trains and the best convenience stores on earth.",
        capital: "Tokyo",
        currency: "JPY",
        languages: &["Japanese"],
    },
    Country {
        code: "TH",
        name: "Thailand",
        coordinates: Coordinates::new(15.87, 100.9925),
        adventure_level: AdventureLevel::Casual,
        traveler_types: LEISURE,
        popularity: 9,
        region: Region::Asia,
        description: "Street food, island beaches and golden temples.",
        capital: "Bangkok",
        currency: "THB",
        languages: &["Thai"],
    },
    Country {
        code: "VN",
        name: "Vietnam",
        coordinates: Coordinates::new(14.0583, 108.2772),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 7,
        region: Region::Asia,
        description: "Limestone bays, motorbike loops and noodle soup at dawn.",
        capital: "Hanoi",
        currency: "VND",
        languages: &["Vietnamese"],
    },
    Country {
        code: "ID",
        name: "Indonesia",
        coordinates: Coordinates::new(-0.7893, 113.9213),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 8,
        region: Region::Asia,
        description: "Seventeen thousand islands of volcanoes, reefs and rice terraces.",
        capital: "Jakarta",
        currency: "IDR",
        languages: &["Indonesian"],
    },
    Country {
        code: "NP",
        name: "Nepal",
        coordinates: Coordinates::new(28.3949, 84.124),
        adventure_level: AdventureLevel::Extreme,
        traveler_types: SOLO_FRIENDS,
        popularity: 5,
        region: Region::Asia,
        description: "Himalayan treks to base camps and teahouses above the clouds.",
        capital: "Kathmandu",
        currency: "NPR",
        languages: &["Nepali"],
    },
    Country {
        code: "IN",
        name: "India",
        coordinates: Coordinates::new(20.5937, 78.9629),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_FRIENDS_BUSINESS,
        popularity: 7,
        region: Region::Asia,
        description: "Palaces, spice markets and trains that cross a subcontinent.",
        capital: "New Delhi",
        currency: "INR",
        languages: &["Hindi", "English"],
    },
    Country {
        code: "MV",
        name: "Maldives",
        coordinates: Coordinates::new(3.2028, 73.2207),
        adventure_level: AdventureLevel::Casual,
        traveler_types: COUPLE,
        popularity: 7,
        region: Region::Asia,
        description: "Overwater villas on turquoise atolls.",
        capital: "Male",
        currency: "MVR",
        languages: &["Dhivehi"],
    },
    Country {
        code: "SG",
        name: "Singapore",
        coordinates: Coordinates::new(1.3521, 103.8198),
        adventure_level: AdventureLevel::Casual,
        traveler_types: FAMILY_BUSINESS_SOLO,
        popularity: 7,
        region: Region::Asia,
        description: "Hawker centres and garden skyscrapers in a compact city-state.",
        capital: "Singapore",
        currency: "SGD",
        languages: &["English", "Malay", "Mandarin", "Tamil"],
    },
    Country {
        code: "KR",
        name: "South Korea",
        coordinates: Coordinates::new(35.9078, 127.7669),
        adventure_level: AdventureLevel::Casual,
        traveler_types: CITY,
        popularity: 7,
        region: Region::Asia,
        description: "Palaces, night markets and mountain temples an hour from Seoul.",
        capital: "Seoul",
        currency: "KRW",
        languages: &["Korean"],
    },
    Country {
        code: "MA",
        name: "Morocco",
        coordinates: Coordinates::new(31.7917, -7.0926),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 7,
        region: Region::Africa,
        description: "Souks, riads and Sahara camps under the stars.",
        capital: "Rabat",
        currency: "MAD",
        languages: &["Arabic", "Berber", "French"],
    },
    Country {
        code: "EG",
        name: "Egypt",
        coordinates: Coordinates::new(26.8206, 30.8025),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: FAMILY_FRIENDS_SOLO,
        popularity: 7,
        region: Region::Africa,
        description: "Pyramids, Nile cruises and Red Sea diving.",
        capital: "Cairo",
        currency: "EGP",
        languages: &["Arabic"],
    },
    Country {
        code: "KE",
        name: "Kenya",
        coordinates: Coordinates::new(-0.0236, 37.9062),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SAFARI,
        popularity: 6,
        region: Region::Africa,
        description: "Great Migration safaris and Swahili coast beaches.",
        capital: "Nairobi",
        currency: "KES",
        languages: &["Swahili", "English"],
    },
    Country {
        code: "TZ",
        name: "Tanzania",
        coordinates: Coordinates::new(-6.369, 34.8888),
        adventure_level: AdventureLevel::Extreme,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 5,
        region: Region::Africa,
        description: "Kilimanjaro summits, the Serengeti and Zanzibar spice farms.",
        capital: "Dodoma",
        currency: "TZS",
        languages: &["Swahili", "English"],
    },
    Country {
        code: "ZA",
        name: "South Africa",
        coordinates: Coordinates::new(-30.5595, 22.9375),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SAFARI,
        popularity: 7,
        region: Region::Africa,
        description: "Wine country, Table Mountain and Big Five game drives.",
        capital: "Pretoria",
        currency: "ZAR",
        languages: &["Zulu", "Xhosa", "Afrikaans", "English"],
    },
    Country {
        code: "AE",
        name: "United Arab Emirates",
        coordinates: Coordinates::new(23.4241, 53.8478),
        adventure_level: AdventureLevel::Casual,
        traveler_types: COUPLE_FAMILY_BUSINESS,
        popularity: 8,
        region: Region::MiddleEast,
        description: "Desert dunes next to record-breaking skylines.",
        capital: "Abu Dhabi",
        currency: "AED",
        languages: &["Arabic"],
    },
    Country {
        code: "JO",
        name: "Jordan",
        coordinates: Coordinates::new(30.5852, 36.2384),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 5,
        region: Region::MiddleEast,
        description: "Petra by candlelight and a float in the Dead Sea.",
        capital: "Amman",
        currency: "JOD",
        languages: &["Arabic"],
    },
    Country {
        code: "US",
        name: "United States",
        coordinates: Coordinates::new(37.0902, -95.7129),
        adventure_level: AdventureLevel::Casual,
        traveler_types: ALL,
        popularity: 10,
        region: Region::NorthAmerica,
        description: "National parks, road trips and cities that never sleep.",
        capital: "Washington, D.C.",
        currency: "USD",
        languages: &["English"],
    },
    Country {
        code: "CA",
        name: "Canada",
        coordinates: Coordinates::new(56.1304, -106.3468),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: FAMILY_FRIENDS_SOLO,
        popularity: 8,
        region: Region::NorthAmerica,
        description: "Rocky Mountain lakes, maple forests and friendly cities.",
        capital: "Ottawa",
        currency: "CAD",
        languages: &["English", "French"],
    },
    Country {
        code: "MX",
        name: "Mexico",
        coordinates: Coordinates::new(23.6345, -102.5528),
        adventure_level: AdventureLevel::Casual,
        traveler_types: LEISURE,
        popularity: 9,
        region: Region::NorthAmerica,
        description: "Mayan ruins, cenotes and tacos al pastor.",
        capital: "Mexico City",
        currency: "MXN",
        languages: &["Spanish"],
    },
    Country {
        code: "CR",
        name: "Costa Rica",
        coordinates: Coordinates::new(9.7489, -83.7534),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_COUPLE_FAMILY,
        popularity: 6,
        region: Region::NorthAmerica,
        description: "Cloud forests, zip lines and sloths on two coasts.",
        capital: "San Jose",
        currency: "CRC",
        languages: &["Spanish"],
    },
    Country {
        code: "PE",
        name: "Peru",
        coordinates: Coordinates::new(-9.19, -75.0152),
        adventure_level: AdventureLevel::Extreme,
        traveler_types: SOLO_FRIENDS,
        popularity: 6,
        region: Region::SouthAmerica,
        description: "The Inca Trail, Amazon lodges and ceviche in Lima.",
        capital: "Lima",
        currency: "PEN",
        languages: &["Spanish", "Quechua"],
    },
    Country {
        code: "AR",
        name: "Argentina",
        coordinates: Coordinates::new(-38.4161, -63.6167),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 6,
        region: Region::SouthAmerica,
        description: "Tango halls, Patagonian glaciers and Malbec country.",
        capital: "Buenos Aires",
        currency: "ARS",
        languages: &["Spanish"],
    },
    Country {
        code: "BR",
        name: "Brazil",
        coordinates: Coordinates::new(-14.235, -51.9253),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: GROUPS,
        popularity: 7,
        region: Region::SouthAmerica,
        description: "Carnival, Iguazu Falls and endless beaches.",
        capital: "Brasilia",
        currency: "BRL",
        languages: &["Portuguese"],
    },
    Country {
        code: "CL",
        name: "Chile",
        coordinates: Coordinates::new(-35.6751, -71.543),
        adventure_level: AdventureLevel::Extreme,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 5,
        region: Region::SouthAmerica,
        description: "Atacama stargazing and Torres del Paine treks.",
        capital: "Santiago",
        currency: "CLP",
        languages: &["Spanish"],
    },
    Country {
        code: "CU",
        name: "Cuba",
        coordinates: Coordinates::new(21.5218, -77.7812),
        adventure_level: AdventureLevel::Casual,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 5,
        region: Region::Caribbean,
        description: "Classic cars, salsa and colonial plazas.",
        capital: "Havana",
        currency: "CUP",
        languages: &["Spanish"],
    },
    Country {
        code: "JM",
        name: "Jamaica",
        coordinates: Coordinates::new(18.1096, -77.2975),
        adventure_level: AdventureLevel::Casual,
        traveler_types: GROUPS,
        popularity: 6,
        region: Region::Caribbean,
        description: "Reggae, waterfalls and jerk stands on white-sand bays.",
        capital: "Kingston",
        currency: "JMD",
        languages: &["English"],
    },
    Country {
        code: "AU",
        name: "Australia",
        coordinates: Coordinates::new(-25.2744, 133.7751),
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: LEISURE,
        popularity: 8,
        region: Region::Oceania,
        description: "The Great Barrier Reef, the Outback and harbour cities.",
        capital: "Canberra",
        currency: "AUD",
        languages: &["English"],
    },
    Country {
        code: "NZ",
        name: "New Zealand",
        coordinates: Coordinates::new(-40.9006, 174.886),
        adventure_level: AdventureLevel::Extreme,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 7,
        region: Region::Oceania,
        description: "Bungy jumps, fiords and Middle-earth landscapes.",
        capital: "Wellington",
        currency: "NZD",
        languages: &["English", "Maori"],
    },
    Country {
        code: "FJ",
        name: "Fiji",
        coordinates: Coordinates::new(-17.7134, 178.065),
        adventure_level: AdventureLevel::Casual,
        traveler_types: COUPLE_FAMILY,
        popularity: 5,
        region: Region::Oceania,
        description: "Coral reefs and village kava ceremonies.",
        capital: "Suva",
        currency: "FJD",
        languages: &["English", "Fijian", "Hindi"],
    },
];

static DESTINATIONS: &[Destination] = &[
    Destination {
        id: "paris-fr",
        city: "Paris",
        country_code: "FR",
        coordinates: Coordinates::new(48.8566, 2.3522),
        region: Region::Europe,
        adventure_level: AdventureLevel::Casual,
        traveler_types: LEISURE,
        popularity: 10,
        daily_budget_usd: DailyBudget { budget: 90, mid_range: 220, luxury: 600 },
        activities: &["Louvre", "Seine river cruise", "Montmartre walk"],
        photo_keyword: "paris eiffel tower",
    },
    Destination {
        id: "santorini-gr",
        city: "Santorini",
        country_code: "GR",
        coordinates: Coordinates::new(36.3932, 25.4615),
        region: Region::Europe,
        adventure_level: AdventureLevel::Casual,
        traveler_types: COUPLE,
        popularity: 9,
        daily_budget_usd: DailyBudget { budget: 110, mid_range: 250, luxury: 700 },
        activities: &["Oia sunset", "Caldera sailing", "Winery tour"],
        photo_keyword: "santorini oia",
    },
    Destination {
        id: "rome-it",
        city: "Rome",
        country_code: "IT",
        coordinates: Coordinates::new(41.9028, 12.4964),
        region: Region::Europe,
        adventure_level: AdventureLevel::Casual,
        traveler_types: LEISURE,
        popularity: 9,
        daily_budget_usd: DailyBudget { budget: 80, mid_range: 190, luxury: 500 },
        activities: &["Colosseum", "Vatican Museums", "Trastevere food tour"],
        photo_keyword: "rome colosseum",
    },
    Destination {
        id: "barcelona-es",
        city: "Barcelona",
        country_code: "ES",
        coordinates: Coordinates::new(41.3874, 2.1686),
        region: Region::Europe,
        adventure_level: AdventureLevel::Casual,
        traveler_types: LEISURE,
        popularity: 9,
        daily_budget_usd: DailyBudget { budget: 75, mid_range: 170, luxury: 450 },
        activities: &["Sagrada Familia", "Park Guell", "Tapas crawl"],
        photo_keyword: "barcelona sagrada familia",
    },
    Destination {
        id: "lisbon-pt",
        city: "Lisbon",
        country_code: "PT",
        coordinates: Coordinates::new(38.7223, -9.1393),
        region: Region::Europe,
        adventure_level: AdventureLevel::Casual,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 8,
        daily_budget_usd: DailyBudget { budget: 65, mid_range: 150, luxury: 380 },
        activities: &["Tram 28", "Belem pastries", "Sintra day trip"],
        photo_keyword: "lisbon alfama",
    },
    Destination {
        id: "reykjavik-is",
        city: "Reykjavik",
        country_code: "IS",
        coordinates: Coordinates::new(64.1466, -21.9426),
        region: Region::Europe,
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 7,
        daily_budget_usd: DailyBudget { budget: 140, mid_range: 280, luxury: 650 },
        activities: &["Golden Circle", "Blue Lagoon", "Northern lights tour"],
        photo_keyword: "iceland northern lights",
    },
    Destination {
        id: "interlaken-ch",
        city: "Interlaken",
        country_code: "CH",
        coordinates: Coordinates::new(46.6863, 7.8632),
        region: Region::Europe,
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: GROUPS,
        popularity: 6,
        daily_budget_usd: DailyBudget { budget: 150, mid_range: 300, luxury: 700 },
        activities: &["Paragliding", "Jungfraujoch", "Lake Brienz cruise"],
        photo_keyword: "interlaken alps",
    },
    Destination {
        id: "tokyo-jp",
        city: "Tokyo",
        country_code: "JP",
        coordinates: Coordinates::new(35.6762, 139.6503),
        region: Region::Asia,
        adventure_level: AdventureLevel::Casual,
        traveler_types: ALL,
        popularity: 10,
        daily_budget_usd: DailyBudget { budget: 90, mid_range: 200, luxury: 550 },
        activities: &["Shibuya crossing", "Tsukiji outer market", "Day trip to Nikko"],
        photo_keyword: "tokyo skyline",
    },
    Destination {
        id: "kyoto-jp",
        city: "Kyoto",
        country_code: "JP",
        coordinates: Coordinates::new(35.0116, 135.7681),
        region: Region::Asia,
        adventure_level: AdventureLevel::Casual,
        traveler_types: SOLO_COUPLE_FAMILY,
        popularity: 9,
        daily_budget_usd: DailyBudget { budget: 80, mid_range: 180, luxury: 450 },
        activities: &["Fushimi Inari", "Arashiyama bamboo grove", "Tea ceremony"],
        photo_keyword: "kyoto temple",
    },
    Destination {
        id: "bangkok-th",
        city: "Bangkok",
        country_code: "TH",
        coordinates: Coordinates::new(13.7563, 100.5018),
        region: Region::Asia,
        adventure_level: AdventureLevel::Casual,
        traveler_types: SOLO_FRIENDS_BUSINESS,
        popularity: 9,
        daily_budget_usd: DailyBudget { budget: 40, mid_range: 100, luxury: 300 },
        activities: &["Grand Palace", "Floating markets", "Rooftop bars"],
        photo_keyword: "bangkok temple",
    },
    Destination {
        id: "chiang-mai-th",
        city: "Chiang Mai",
        country_code: "TH",
        coordinates: Coordinates::new(18.7883, 98.9853),
        region: Region::Asia,
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 7,
        daily_budget_usd: DailyBudget { budget: 30, mid_range: 80, luxury: 220 },
        activities: &["Elephant sanctuary", "Doi Suthep", "Night bazaar"],
        photo_keyword: "chiang mai",
    },
    Destination {
        id: "bali-id",
        city: "Bali",
        country_code: "ID",
        coordinates: Coordinates::new(-8.3405, 115.092),
        region: Region::Asia,
        adventure_level: AdventureLevel::Casual,
        traveler_types: LEISURE,
        popularity: 9,
        daily_budget_usd: DailyBudget { budget: 45, mid_range: 120, luxury: 400 },
        activities: &["Ubud rice terraces", "Uluwatu temple", "Surf lessons"],
        photo_keyword: "bali rice terraces",
    },
    Destination {
        id: "hanoi-vn",
        city: "Hanoi",
        country_code: "VN",
        coordinates: Coordinates::new(21.0278, 105.8342),
        region: Region::Asia,
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_FRIENDS,
        popularity: 7,
        daily_budget_usd: DailyBudget { budget: 30, mid_range: 75, luxury: 200 },
        activities: &["Old Quarter street food", "Ha Long Bay cruise", "Water puppet show"],
        photo_keyword: "hanoi old quarter",
    },
    Destination {
        id: "kathmandu-np",
        city: "Kathmandu",
        country_code: "NP",
        coordinates: Coordinates::new(27.7172, 85.324),
        region: Region::Asia,
        adventure_level: AdventureLevel::Extreme,
        traveler_types: SOLO_FRIENDS,
        popularity: 5,
        daily_budget_usd: DailyBudget { budget: 25, mid_range: 60, luxury: 180 },
        activities: &["Everest flight", "Boudhanath stupa", "Annapurna trek start"],
        photo_keyword: "kathmandu himalaya",
    },
    Destination {
        id: "north-male-atoll-mv",
        city: "North Male Atoll",
        country_code: "MV",
        coordinates: Coordinates::new(4.1755, 73.5093),
        region: Region::Asia,
        adventure_level: AdventureLevel::Casual,
        traveler_types: COUPLE,
        popularity: 7,
        daily_budget_usd: DailyBudget { budget: 200, mid_range: 450, luxury: 1200 },
        activities: &["Overwater villa", "Manta snorkelling", "Sandbank picnic"],
        photo_keyword: "maldives overwater villa",
    },
    Destination {
        id: "singapore-sg",
        city: "Singapore",
        country_code: "SG",
        coordinates: Coordinates::new(1.3521, 103.8198),
        region: Region::Asia,
        adventure_level: AdventureLevel::Casual,
        traveler_types: FAMILY_BUSINESS_SOLO,
        popularity: 8,
        daily_budget_usd: DailyBudget { budget: 100, mid_range: 220, luxury: 550 },
        activities: &["Gardens by the Bay", "Hawker centres", "Sentosa"],
        photo_keyword: "singapore marina bay",
    },
    Destination {
        id: "marrakech-ma",
        city: "Marrakech",
        country_code: "MA",
        coordinates: Coordinates::new(31.6295, -7.9811),
        region: Region::Africa,
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 7,
        daily_budget_usd: DailyBudget { budget: 45, mid_range: 110, luxury: 350 },
        activities: &["Jemaa el-Fnaa", "Atlas Mountains day trip", "Hammam"],
        photo_keyword: "marrakech medina",
    },
    Destination {
        id: "cape-town-za",
        city: "Cape Town",
        country_code: "ZA",
        coordinates: Coordinates::new(-33.9249, 18.4241),
        region: Region::Africa,
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SAFARI,
        popularity: 8,
        daily_budget_usd: DailyBudget { budget: 60, mid_range: 140, luxury: 400 },
        activities: &["Table Mountain", "Cape Winelands", "Boulders Beach penguins"],
        photo_keyword: "cape town table mountain",
    },
    Destination {
        id: "nairobi-ke",
        city: "Nairobi",
        country_code: "KE",
        coordinates: Coordinates::new(-1.2921, 36.8219),
        region: Region::Africa,
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SAFARI,
        popularity: 6,
        daily_budget_usd: DailyBudget { budget: 60, mid_range: 150, luxury: 450 },
        activities: &["Maasai Mara safari", "Giraffe Centre", "Nairobi National Park"],
        photo_keyword: "kenya safari",
    },
    Destination {
        id: "dubai-ae",
        city: "Dubai",
        country_code: "AE",
        coordinates: Coordinates::new(25.2048, 55.2708),
        region: Region::MiddleEast,
        adventure_level: AdventureLevel::Casual,
        traveler_types: COUPLE_FAMILY_BUSINESS,
        popularity: 9,
        daily_budget_usd: DailyBudget { budget: 120, mid_range: 260, luxury: 800 },
        activities: &["Burj Khalifa", "Desert safari", "Dubai Mall aquarium"],
        photo_keyword: "dubai skyline",
    },
    Destination {
        id: "new-york-us",
        city: "New York",
        country_code: "US",
        coordinates: Coordinates::new(40.7128, -74.006),
        region: Region::NorthAmerica,
        adventure_level: AdventureLevel::Casual,
        traveler_types: ALL,
        popularity: 10,
        daily_budget_usd: DailyBudget { budget: 150, mid_range: 300, luxury: 800 },
        activities: &["Central Park", "Broadway show", "Brooklyn Bridge walk"],
        photo_keyword: "new york city",
    },
    Destination {
        id: "banff-ca",
        city: "Banff",
        country_code: "CA",
        coordinates: Coordinates::new(51.1784, -115.5708),
        region: Region::NorthAmerica,
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_COUPLE_FAMILY,
        popularity: 7,
        daily_budget_usd: DailyBudget { budget: 120, mid_range: 240, luxury: 550 },
        activities: &["Lake Louise", "Icefields Parkway", "Gondola ride"],
        photo_keyword: "banff lake louise",
    },
    Destination {
        id: "cancun-mx",
        city: "Cancun",
        country_code: "MX",
        coordinates: Coordinates::new(21.1619, -86.8515),
        region: Region::NorthAmerica,
        adventure_level: AdventureLevel::Casual,
        traveler_types: GROUPS,
        popularity: 8,
        daily_budget_usd: DailyBudget { budget: 80, mid_range: 180, luxury: 500 },
        activities: &["Cenote swimming", "Chichen Itza", "Isla Mujeres"],
        photo_keyword: "cancun beach",
    },
    Destination {
        id: "cusco-pe",
        city: "Cusco",
        country_code: "PE",
        coordinates: Coordinates::new(-13.5319, -71.9675),
        region: Region::SouthAmerica,
        adventure_level: AdventureLevel::Extreme,
        traveler_types: SOLO_FRIENDS,
        popularity: 6,
        daily_budget_usd: DailyBudget { budget: 40, mid_range: 90, luxury: 300 },
        activities: &["Machu Picchu", "Rainbow Mountain", "Sacred Valley"],
        photo_keyword: "machu picchu",
    },
    Destination {
        id: "rio-de-janeiro-br",
        city: "Rio de Janeiro",
        country_code: "BR",
        coordinates: Coordinates::new(-22.9068, -43.1729),
        region: Region::SouthAmerica,
        adventure_level: AdventureLevel::Adventurous,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 7,
        daily_budget_usd: DailyBudget { budget: 60, mid_range: 140, luxury: 400 },
        activities: &["Sugarloaf Mountain", "Copacabana", "Christ the Redeemer"],
        photo_keyword: "rio de janeiro",
    },
    Destination {
        id: "havana-cu",
        city: "Havana",
        country_code: "CU",
        coordinates: Coordinates::new(23.1136, -82.3666),
        region: Region::Caribbean,
        adventure_level: AdventureLevel::Casual,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 5,
        daily_budget_usd: DailyBudget { budget: 50, mid_range: 110, luxury: 300 },
        activities: &["Old Havana", "Classic car tour", "Malecon at sunset"],
        photo_keyword: "havana classic car",
    },
    Destination {
        id: "sydney-au",
        city: "Sydney",
        country_code: "AU",
        coordinates: Coordinates::new(-33.8688, 151.2093),
        region: Region::Oceania,
        adventure_level: AdventureLevel::Casual,
        traveler_types: LEISURE,
        popularity: 8,
        daily_budget_usd: DailyBudget { budget: 110, mid_range: 230, luxury: 550 },
        activities: &["Opera House", "Bondi to Coogee walk", "Blue Mountains"],
        photo_keyword: "sydney opera house",
    },
    Destination {
        id: "queenstown-nz",
        city: "Queenstown",
        country_code: "NZ",
        coordinates: Coordinates::new(-45.0312, 168.6626),
        region: Region::Oceania,
        adventure_level: AdventureLevel::Extreme,
        traveler_types: SOLO_COUPLE_FRIENDS,
        popularity: 7,
        daily_budget_usd: DailyBudget { budget: 110, mid_range: 220, luxury: 500 },
        activities: &["Bungy jump", "Milford Sound", "Skyline luge"],
        photo_keyword: "queenstown new zealand",
    },
];

/// Every bundled country.
pub fn countries() -> &'static [Country] {
    COUNTRIES
}

/// Every bundled destination.
pub fn destinations() -> &'static [Destination] {
    DESTINATIONS
}

/// Looks up a country by ISO alpha-2 code, ignoring case.
pub fn find_country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

pub fn find_destination(id: &str) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_country_codes_are_unique() {
        let codes: HashSet<_> = countries().iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), countries().len());
    }

    #[test]
    fn test_destination_ids_are_unique() {
        let ids: HashSet<_> = destinations().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), destinations().len());
    }

    #[test]
    fn test_popularity_within_bounds() {
        for country in countries() {
            assert!((1..=10).contains(&country.popularity), "{} out of range", country.code);
        }
        for destination in destinations() {
            assert!((1..=10).contains(&destination.popularity), "{} out of range", destination.id);
        }
    }

    #[test]
    fn test_every_destination_has_a_country() {
        for destination in destinations() {
            let country = find_country(destination.country_code)
                .unwrap_or_else(|| panic!("missing country for {}", destination.id));
            assert_eq!(country.region, destination.region, "region mismatch for {}", destination.id);
        }
    }

    #[test]
    fn test_budget_tiers_are_ordered() {
        for destination in destinations() {
            let b = destination.daily_budget_usd;
            assert!(b.budget < b.mid_range && b.mid_range < b.luxury, "{}", destination.id);
        }
    }

    #[test]
    fn test_find_country_ignores_case() {
        assert_eq!(find_country("jp").map(|c| c.name), Some("Japan"));
        assert!(find_country("XX").is_none());
        assert_eq!(find_destination("kyoto-jp").map(|d| d.city), Some("Kyoto"));
    }
}
