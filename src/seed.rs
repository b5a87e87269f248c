//! Seed directory used to populate an empty store.

use crate::models::Advocate;

/// The fixed list of advocates inserted by `seed_advocates`.
pub fn advocate_seed_data() -> Vec<Advocate> {
    vec![
        Advocate::new("John", "Doe", "New York", "MD")
            .with_specialties(["Bipolar", "LGBTQ", "Medication/Prescribing"])
            .with_years_of_experience(10)
            .with_phone_number(5551234567),
        Advocate::new("Jane", "Smith", "Los Angeles", "PhD")
            .with_specialties(["Trauma & PTSD", "Personality disorders"])
            .with_years_of_experience(8)
            .with_phone_number(5559876543),
        Advocate::new("Alice", "Johnson", "Chicago", "MSW")
            .with_specialties(["Relationship Issues (Family, Friends, Couple, etc)"])
            .with_years_of_experience(5)
            .with_phone_number(5554567890),
        Advocate::new("Michael", "Brown", "Houston", "MD")
            .with_specialties(["Attention and Hyperactivity (ADHD)", "Sleep issues"])
            .with_years_of_experience(12)
            .with_phone_number(5556543210),
        Advocate::new("Emily", "Davis", "Phoenix", "PhD")
            .with_specialties(["Schizophrenia and psychotic disorders"])
            .with_years_of_experience(7)
            .with_phone_number(5553210987),
        Advocate::new("Chris", "Martinez", "Philadelphia", "MSW")
            .with_specialties(["Coaching (leadership, career, academic and wellness)"])
            .with_years_of_experience(9)
            .with_phone_number(5557890123),
        Advocate::new("Jessica", "Taylor", "San Antonio", "MD")
            .with_specialties(["Eating disorders", "Weight loss & nutrition"])
            .with_years_of_experience(11)
            .with_phone_number(5554561234),
        Advocate::new("David", "Harris", "San Diego", "PhD")
            .with_specialties(["Substance use/abuse", "Chronic pain"])
            .with_years_of_experience(6)
            .with_phone_number(5557896543),
        Advocate::new("Laura", "Clark", "Dallas", "MSW")
            .with_specialties(["Grief and loss", "Life coaching"])
            .with_years_of_experience(4)
            .with_phone_number(5550123456),
        Advocate::new("Daniel", "Lewis", "San Jose", "MD")
            .with_specialties(["Pediatrics", "Family Medicine", "RN"])
            .with_years_of_experience(13)
            .with_phone_number(5553217654),
        Advocate::new("Sarah", "Lee", "Austin", "PhD")
            .with_specialties(["Anxiety", "Women's issues (post-partum, infertility, family planning)"])
            .with_years_of_experience(10)
            .with_phone_number(5551238765),
        Advocate::new("James", "King", "Jacksonville", "MSW")
            .with_specialties(["Men's issues", "Domestic abuse"])
            .with_years_of_experience(5)
            .with_phone_number(5556540987),
        Advocate::new("Megan", "Green", "San Francisco", "MD")
            .with_specialties(["Suicide History/Attempts", "Neuropsychological evaluations & testing (ADHD testing)"])
            .with_years_of_experience(14)
            .with_phone_number(5559873456),
        Advocate::new("Joshua", "Walker", "Columbus", "PhD")
            .with_specialties(["Life changes", "Obsessive-compulsive disorders"])
            .with_years_of_experience(9)
            .with_phone_number(5556781234),
        Advocate::new("Amanda", "Hall", "Fort Worth", "MSW")
            .with_specialties(["Autism", "Intellectual disabilities"])
            .with_years_of_experience(3)
            .with_phone_number(5559872345),
    ]
}
