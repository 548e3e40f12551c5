//! Static topic table backing the "look up" view.
//!
//! Pure hard coded data. The only contract is key-based retrieval: known ids
//! return the topic card, unknown ids return nothing.

use derive_builder::Builder;
use std::sync::LazyLock;

/// One entry of the look-up table. `facts`, `social_media` and `links` keep
/// their authored order, so they are pair lists rather than maps.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    pub image: Option<String>,
    pub description: String,
    pub facts: Vec<(String, String)>,
    pub social_media: Vec<(String, String)>,
    pub links: Vec<(String, String)>,
}

impl Topic {
    /// The logo when one exists, else the image. Both are optional.
    pub fn picture(&self) -> Option<&str> {
        self.logo.as_deref().or(self.image.as_deref())
    }
}

fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

static TOPICS: LazyLock<Vec<Topic>> = LazyLock::new(|| {
    vec![
        TopicBuilder::default()
            .id("saul_sharma")
            .name("Saúl Sharma")
            .image("https://pbs.twimg.com/profile_images/1776070739319214080/TBARcp9C_400x400.jpg")
            .description("Hey folks! 👋")
            .build()
            .expect("topic: saul_sharma"),
        TopicBuilder::default()
            .id("wwe")
            .name("WWE")
            .logo("https://upload.wikimedia.org/wikipedia/commons/thumb/0/0b/WWE_Logo.svg/150px-WWE_Logo.svg.png")
            .description("World Wrestling Entertainment, Inc. is an American professional wrestling promotion.")
            .facts(pairs(&[
                ("Founded", "February 21, 1980"),
                ("Headquarters", "Stamford, Connecticut"),
                ("CEO", "Nick Khan (2023-)"),
                ("Employees", "900+ (2023)"),
                ("Revenue", "$1.3 billion (2022)"),
            ]))
            .social_media(pairs(&[
                ("instagram", "@wwe"),
                ("twitter", "@WWE"),
                ("facebook", "WWE"),
            ]))
            .links(pairs(&[("website", "wwe.com"), ("wikipedia", "WWE")]))
            .build()
            .expect("topic: wwe"),
        TopicBuilder::default()
            .id("trump")
            .name("Donald Trump")
            .image("https://upload.wikimedia.org/wikipedia/commons/thumb/5/56/Donald_Trump_official_portrait.jpg/150px-Donald_Trump_official_portrait.jpg")
            .description("45th president of the United States")
            .facts(pairs(&[
                ("Born", "June 14, 1946"),
                ("Birthplace", "Queens, New York City"),
                ("Political party", "Republican"),
                ("Presidency", "2017-2021"),
                ("Net worth", "$2.5 billion (2023)"),
            ]))
            .social_media(pairs(&[
                ("twitter", "@realDonaldTrump"),
                ("truth_social", "@realDonaldTrump"),
            ]))
            .links(pairs(&[
                ("website", "donaldjtrump.com"),
                ("wikipedia", "Donald_Trump"),
            ]))
            .build()
            .expect("topic: trump"),
        TopicBuilder::default()
            .id("musk")
            .name("Elon Musk")
            .image("https://upload.wikimedia.org/wikipedia/commons/thumb/3/34/Elon_Musk_Royal_Society_%28crop2%29.jpg/150px-Elon_Musk_Royal_Society_%28crop2%29.jpg")
            .description("CEO of SpaceX and Tesla")
            .facts(pairs(&[
                ("Born", "June 28, 1971"),
                ("Birthplace", "Pretoria, South Africa"),
                ("Citizenship", "South Africa, Canada, United States"),
                ("Net worth", "$234 billion (2024)"),
                ("Companies", "Tesla, SpaceX, X, Neuralink"),
            ]))
            .social_media(pairs(&[
                ("twitter", "@elonmusk"),
                ("instagram", "@elonmusk"),
            ]))
            .links(pairs(&[("wikipedia", "Elon_Musk")]))
            .build()
            .expect("topic: musk"),
        TopicBuilder::default()
            .id("spacex")
            .name("SpaceX")
            .logo("https://upload.wikimedia.org/wikipedia/commons/thumb/3/36/SpaceX-Logo-Xonly.svg/150px-SpaceX-Logo-Xonly.svg.png")
            .description("American aerospace manufacturer and space transport company")
            .facts(pairs(&[
                ("Founded", "March 14, 2002"),
                ("Headquarters", "Hawthorne, California"),
                ("CEO", "Elon Musk"),
                ("Employees", "13,000+"),
                ("Valuation", "$180 billion (2024)"),
            ]))
            .social_media(pairs(&[
                ("twitter", "@SpaceX"),
                ("instagram", "@spacex"),
            ]))
            .links(pairs(&[
                ("website", "spacex.com"),
                ("wikipedia", "SpaceX"),
            ]))
            .build()
            .expect("topic: spacex"),
        TopicBuilder::default()
            .id("tesla")
            .name("Tesla, Inc.")
            .logo("https://upload.wikimedia.org/wikipedia/commons/thumb/b/bd/Tesla_Motors.svg/150px-Tesla_Motors.svg.png")
            .description("Electric vehicle and clean energy company")
            .facts(pairs(&[
                ("Founded", "July 1, 2003"),
                ("Headquarters", "Austin, Texas"),
                ("CEO", "Elon Musk (2008-)"),
                ("Employees", "127,855 (2023)"),
                ("Revenue", "$81.5 billion (2023)"),
            ]))
            .social_media(pairs(&[
                ("twitter", "@Tesla"),
                ("instagram", "@teslamotors"),
                ("facebook", "Tesla"),
            ]))
            .links(pairs(&[
                ("website", "tesla.com"),
                ("wikipedia", "Tesla,_Inc."),
            ]))
            .build()
            .expect("topic: tesla"),
        TopicBuilder::default()
            .id("russia")
            .name("Russia")
            .image("https://upload.wikimedia.org/wikipedia/commons/thumb/f/f3/Flag_of_Russia.svg/150px-Flag_of_Russia.svg.png")
            .description("The largest country in the world by land mass")
            .facts(pairs(&[
                ("Capital", "Moscow"),
                ("Population", "143.4 million (2023)"),
                ("President", "Vladimir Putin"),
                ("Area", "17.1 million km²"),
                ("Currency", "Russian Ruble"),
            ]))
            .social_media(pairs(&[("telegram", "@kremlinrussia_e")]))
            .links(pairs(&[
                ("website", "government.ru/en"),
                ("wikipedia", "Russia"),
            ]))
            .build()
            .expect("topic: russia"),
        TopicBuilder::default()
            .id("baltic")
            .name("Baltic Sea")
            .image("https://upload.wikimedia.org/wikipedia/commons/thumb/8/8e/Baltic_Sea_map.png/150px-Baltic_Sea_map.png")
            .description("Arm of the Atlantic Ocean in Northern Europe")
            .facts(pairs(&[
                ("Area", "377,000 km²"),
                ("Average depth", "55 meters"),
                ("Max depth", "459 meters"),
                ("Bordering countries", "9 countries"),
                ("Major ports", "Stockholm, Gdańsk, Helsinki"),
            ]))
            .links(pairs(&[("wikipedia", "Baltic_Sea")]))
            .build()
            .expect("topic: baltic"),
        TopicBuilder::default()
            .id("nadal")
            .name("Rafael Nadal")
            .image("https://upload.wikimedia.org/wikipedia/commons/thumb/9/9b/Rafael_Nadal_10%2C_Aegon_Championships%2C_London%2C_UK_-_Diliff.jpg/150px-Rafael_Nadal_10%2C_Aegon_Championships%2C_London%2C_UK_-_Diliff.jpg")
            .description("Spanish professional tennis player")
            .facts(pairs(&[
                ("Born", "June 3, 1986"),
                ("Birthplace", "Mallorca, Spain"),
                ("Grand Slams", "22"),
                ("Career titles", "92"),
                ("Highest ranking", "World No. 1"),
            ]))
            .social_media(pairs(&[
                ("instagram", "@rafaelnadal"),
                ("twitter", "@RafaelNadal"),
                ("facebook", "Nadal"),
            ]))
            .links(pairs(&[
                ("website", "rafaelnadal.com"),
                ("wikipedia", "Rafael_Nadal"),
            ]))
            .build()
            .expect("topic: nadal"),
        TopicBuilder::default()
            .id("davis-cup")
            .name("Davis Cup")
            .logo("https://upload.wikimedia.org/wikipedia/en/thumb/7/7e/Davis_Cup_logo.svg/150px-Davis_Cup_logo.svg.png")
            .description("Premier international team event in men's tennis")
            .facts(pairs(&[
                ("Founded", "1900"),
                ("Most titles", "United States (32)"),
                ("Current champion", "Italy (2023)"),
                ("Format", "Team tournament"),
                ("Participants", "148 nations"),
            ]))
            .social_media(pairs(&[
                ("twitter", "@DavisCup"),
                ("instagram", "@daviscup"),
                ("facebook", "DavisCup"),
            ]))
            .links(pairs(&[
                ("website", "daviscup.com"),
                ("wikipedia", "Davis_Cup"),
            ]))
            .build()
            .expect("topic: davis-cup"),
        TopicBuilder::default()
            .id("delta")
            .name("Delta Air Lines")
            .logo("https://upload.wikimedia.org/wikipedia/commons/thumb/d/d1/Delta_logo.svg/150px-Delta_logo.svg.png")
            .description("Major American airline")
            .facts(pairs(&[
                ("Founded", "March 2, 1925"),
                ("Headquarters", "Atlanta, Georgia"),
                ("CEO", "Ed Bastian (2016-)"),
                ("Employees", "95,000+ (2023)"),
                ("Fleet size", "900+ aircraft"),
            ]))
            .social_media(pairs(&[
                ("twitter", "@Delta"),
                ("instagram", "@delta"),
                ("facebook", "delta"),
            ]))
            .links(pairs(&[
                ("website", "delta.com"),
                ("wikipedia", "Delta_Air_Lines"),
            ]))
            .build()
            .expect("topic: delta"),
        TopicBuilder::default()
            .id("shake-shack")
            .name("Shake Shack")
            .logo("https://upload.wikimedia.org/wikipedia/commons/thumb/6/62/Shake_Shack_Logo.svg/150px-Shake_Shack_Logo.svg.png")
            .description("American fast casual restaurant chain")
            .facts(pairs(&[
                ("Founded", "2004"),
                ("Headquarters", "New York City"),
                ("CEO", "Randy Garutti"),
                ("Locations", "450+ (2023)"),
                ("Revenue", "$1.1 billion (2023)"),
            ]))
            .social_media(pairs(&[
                ("instagram", "@shakeshack"),
                ("twitter", "@shakeshack"),
                ("facebook", "shakeshack"),
            ]))
            .links(pairs(&[
                ("website", "shakeshack.com"),
                ("wikipedia", "Shake_Shack"),
            ]))
            .build()
            .expect("topic: shake-shack"),
    ]
});

/// Look a topic up by id. Unknown ids are simply not found.
pub fn get_topic(id: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|topic| topic.id == id)
}

/// Every topic, in table order.
pub fn all_topics() -> &'static [Topic] {
    &TOPICS
}
