//! Built-in reference tables loaded once at process start.
use super::{CurrencyEntry, TimezoneEntry};

/// `(value, label, locale)`
const CURRENCIES: &[(&str, &str, &str)] = &[
    ("USD", "$ Dollar", "en-US"),
    ("EUR", "\u{20ac} Euro", "de-DE"),
    ("JPY", "\u{a5} Yen", "ja-JP"),
    ("GBP", "\u{a3} Pound", "en-GB"),
    ("INR", "\u{20b9} Rupee", "en-IN"),
    ("CAD", "$ Canadian Dollar", "en-CA"),
    ("AUD", "$ Australian Dollar", "en-AU"),
    ("CHF", "Fr Swiss Franc", "de-CH"),
    ("CNY", "\u{a5} Yuan", "zh-CN"),
    ("SGD", "$ Singapore Dollar", "en-SG"),
    ("AED", "Dh UAE Dirham", "ar-AE"),
    ("BRL", "R$ Real", "pt-BR"),
];

/// `(tz_code, utc, name)`; the label is derived as `"<tz_code> (GMT<utc>)"`.
const TIMEZONES: &[(&str, &str, &str)] = &[
    ("Pacific/Midway", "-11:00", "Midway, Pago Pago"),
    ("Pacific/Honolulu", "-10:00", "Honolulu, East Honolulu, Pearl City, Hilo"),
    ("America/Anchorage", "-09:00", "Anchorage, Juneau, Fairbanks, Eagle River"),
    ("America/Los_Angeles", "-08:00", "Los Angeles, San Diego, San Jose, San Francisco"),
    ("America/Tijuana", "-08:00", "Tijuana, Mexicali, Ensenada, Rosarito"),
    ("America/Vancouver", "-08:00", "Vancouver, Surrey, Burnaby, Richmond"),
    ("America/Denver", "-07:00", "Denver, El Paso, Albuquerque, Colorado Springs"),
    ("America/Phoenix", "-07:00", "Phoenix, Tucson, Mesa, Chandler"),
    ("America/Chicago", "-06:00", "Chicago, Houston, San Antonio, Dallas"),
    ("America/Mexico_City", "-06:00", "Mexico City, Iztapalapa, Ecatepec, Guadalajara"),
    ("America/New_York", "-05:00", "New York City, Brooklyn, Queens, Philadelphia"),
    ("America/Toronto", "-05:00", "Toronto, Montreal, Ottawa, Mississauga"),
    ("America/Bogota", "-05:00", "Bogota, Cali, Medellin, Barranquilla"),
    ("America/Lima", "-05:00", "Lima, Arequipa, Callao, Trujillo"),
    ("America/Caracas", "-04:00", "Caracas, Maracaibo, Maracay, Valencia"),
    ("America/Halifax", "-04:00", "Halifax, Dartmouth, Moncton, Saint John"),
    ("America/Santiago", "-04:00", "Santiago, Puente Alto, Antofagasta, Vina del Mar"),
    ("America/St_Johns", "-03:30", "St. John's, Mount Pearl, Corner Brook"),
    ("America/Sao_Paulo", "-03:00", "Sao Paulo, Rio de Janeiro, Belo Horizonte, Salvador"),
    ("America/Argentina/Buenos_Aires", "-03:00", "Buenos Aires, Cordoba, Rosario, Mar del Plata"),
    ("America/Montevideo", "-03:00", "Montevideo, Salto, Paysandu, Las Piedras"),
    ("Atlantic/South_Georgia", "-02:00", "Grytviken"),
    ("Atlantic/Azores", "-01:00", "Ponta Delgada"),
    ("Atlantic/Cape_Verde", "-01:00", "Praia, Mindelo, Santa Maria"),
    ("Europe/London", "+00:00", "London, Birmingham, Liverpool, Glasgow"),
    ("Europe/Lisbon", "+00:00", "Lisbon, Porto, Amadora, Braga"),
    ("Africa/Abidjan", "+00:00", "Abidjan, Abobo, Bouake, Daloa"),
    ("Atlantic/Reykjavik", "+00:00", "Reykjavik, Kopavogur, Hafnarfjordur"),
    ("UTC", "+00:00", "Coordinated Universal Time"),
    ("Europe/Berlin", "+01:00", "Berlin, Hamburg, Munich, Cologne"),
    ("Europe/Paris", "+01:00", "Paris, Marseille, Lyon, Toulouse"),
    ("Europe/Madrid", "+01:00", "Madrid, Barcelona, Valencia, Sevilla"),
    ("Europe/Rome", "+01:00", "Rome, Milan, Naples, Turin"),
    ("Europe/Amsterdam", "+01:00", "Amsterdam, Rotterdam, The Hague, Utrecht"),
    ("Europe/Warsaw", "+01:00", "Warsaw, Lodz, Krakow, Wroclaw"),
    ("Europe/Stockholm", "+01:00", "Stockholm, Goteborg, Malmo, Uppsala"),
    ("Africa/Lagos", "+01:00", "Lagos, Kano, Ibadan, Port Harcourt"),
    ("Europe/Athens", "+02:00", "Athens, Thessaloniki, Patra, Piraeus"),
    ("Europe/Helsinki", "+02:00", "Helsinki, Espoo, Tampere, Vantaa"),
    ("Europe/Kiev", "+02:00", "Kyiv, Kharkiv, Odesa, Dnipro"),
    ("Africa/Cairo", "+02:00", "Cairo, Alexandria, Giza, Shubra El Kheima"),
    ("Africa/Johannesburg", "+02:00", "Cape Town, Durban, Johannesburg, Soweto"),
    ("Asia/Jerusalem", "+02:00", "Jerusalem, Tel Aviv, West Jerusalem, Haifa"),
    ("Europe/Istanbul", "+03:00", "Istanbul, Ankara, Izmir, Bursa"),
    ("Europe/Moscow", "+03:00", "Moscow, Saint Petersburg, Nizhniy Novgorod, Kazan"),
    ("Asia/Riyadh", "+03:00", "Riyadh, Jeddah, Mecca, Medina"),
    ("Africa/Nairobi", "+03:00", "Nairobi, Mombasa, Ruiru, Kikuyu"),
    ("Asia/Tehran", "+03:30", "Tehran, Mashhad, Isfahan, Karaj"),
    ("Asia/Dubai", "+04:00", "Dubai, Sharjah, Abu Dhabi, Ajman City"),
    ("Asia/Baku", "+04:00", "Baku, Ganja, Sumqayit, Lankaran"),
    ("Asia/Kabul", "+04:30", "Kabul, Kandahar, Mazar-e Sharif, Herat"),
    ("Asia/Karachi", "+05:00", "Karachi, Lahore, Faisalabad, Rawalpindi"),
    ("Asia/Tashkent", "+05:00", "Tashkent, Namangan, Samarkand, Andijon"),
    ("Asia/Kolkata", "+05:30", "Mumbai, Delhi, Bengaluru, Kolkata"),
    ("Asia/Colombo", "+05:30", "Colombo, Dehiwala-Mount Lavinia, Moratuwa, Jaffna"),
    ("Asia/Kathmandu", "+05:45", "Kathmandu, Pokhara, Patan, Biratnagar"),
    ("Asia/Dhaka", "+06:00", "Dhaka, Chattogram, Khulna, Rajshahi"),
    ("Asia/Almaty", "+06:00", "Almaty, Karagandy, Shymkent, Taraz"),
    ("Asia/Yangon", "+06:30", "Yangon, Mandalay, Nay Pyi Taw, Mawlamyine"),
    ("Asia/Bangkok", "+07:00", "Bangkok, Hanoi, Haiphong, Samut Prakan"),
    ("Asia/Jakarta", "+07:00", "Jakarta, Surabaya, Medan, Bandung"),
    ("Asia/Ho_Chi_Minh", "+07:00", "Ho Chi Minh City, Da Nang, Bien Hoa, Nha Trang"),
    ("Asia/Shanghai", "+08:00", "Shanghai, Beijing, Shenzhen, Guangzhou"),
    ("Asia/Hong_Kong", "+08:00", "Hong Kong, Kowloon, Victoria, Tuen Mun"),
    ("Asia/Singapore", "+08:00", "Singapore, Woodlands, Geylang, Queenstown Estate"),
    ("Asia/Manila", "+08:00", "Quezon City, Manila, Caloocan City, Budta"),
    ("Australia/Perth", "+08:00", "Perth, Rockingham, Mandurah, Bunbury"),
    ("Asia/Tokyo", "+09:00", "Tokyo, Yokohama, Osaka, Nagoya"),
    ("Asia/Seoul", "+09:00", "Seoul, Busan, Incheon, Daegu"),
    ("Australia/Adelaide", "+09:30", "Adelaide, Adelaide Hills, Mount Gambier, Morphett Vale"),
    ("Australia/Darwin", "+09:30", "Darwin, Alice Springs, Palmerston"),
    ("Australia/Brisbane", "+10:00", "Brisbane, Gold Coast, Logan City, Townsville"),
    ("Australia/Sydney", "+10:00", "Sydney, Melbourne, Canberra, Wollongong"),
    ("Pacific/Guam", "+10:00", "Dededo Village, Yigo Village, Tamuning"),
    ("Pacific/Noumea", "+11:00", "Noumea, Mont-Dore, Dumbea"),
    ("Pacific/Auckland", "+12:00", "Auckland, Wellington, Christchurch, Manukau City"),
    ("Pacific/Fiji", "+12:00", "Suva, Lautoka, Nadi, Labasa"),
    ("Pacific/Tongatapu", "+13:00", "Nuku'alofa"),
    ("Pacific/Kiritimati", "+14:00", "Kiritimati"),
];

pub(super) fn currencies() -> Vec<CurrencyEntry> {
    CURRENCIES
        .iter()
        .map(|&(value, label, locale)| CurrencyEntry::new(value, label, locale))
        .collect()
}

pub(super) fn timezones() -> Vec<TimezoneEntry> {
    TIMEZONES
        .iter()
        .map(|&(tz_code, utc, cities)| {
            TimezoneEntry::new(
                format!("{tz_code} (GMT{utc})"),
                tz_code,
                format!("(GMT{utc}) {cities}"),
                utc,
            )
        })
        .collect()
}
