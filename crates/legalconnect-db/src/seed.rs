use legalconnect_types::models::NewLawyer;

/// Lawyer roster inserted into every new store, in id order.
const SEED_LAWYERS: [(&str, &str, &str, &str, u32); 8] = [
    ("Ahmed Ali Khan", "Criminal Law", "Lahore", "+92-300-1234567", 15),
    ("Fatima Sheikh", "Constitutional Law", "Karachi", "+92-321-7654321", 12),
    ("Dr. Yasmeen Hassan", "Family Law", "Islamabad", "+92-345-9876543", 18),
    ("Barrister Ali Zafar", "Women's Rights", "Lahore", "+92-333-1111222", 20),
    ("Advocate Nighat Dad", "Cyber Law", "Lahore", "+92-300-3333444", 10),
    ("Barrister Salman Safdar", "Digital Rights", "Karachi", "+92-321-5555666", 8),
    ("Justice (R) Nasira Javed Iqbal", "Women's Rights", "Islamabad", "+92-345-7777888", 25),
    ("Advocate Hina Jilani", "Human Rights", "Lahore", "+92-300-9999000", 30),
];

pub fn seed_lawyers() -> impl Iterator<Item = NewLawyer> {
    SEED_LAWYERS
        .into_iter()
        .map(|(name, specialization, region, contact, experience)| NewLawyer {
            name: name.to_string(),
            specialization: specialization.to_string(),
            region: region.to_string(),
            contact: contact.to_string(),
            experience,
        })
}
