//! Static vocabulary and canned responses for the pet-care assistant.
//!
//! All tables are plain `const` slices; the classifier compiles the patterns
//! once when it is built.

use crate::domain::model::CannedResponse;

pub const PET_KEYWORDS: &[&str] = &[
    // Animals
    "dog", "dogs", "cat", "cats", "puppy", "puppies", "kitten", "kittens",
    "pet", "pets", "animal", "animals", "bird", "birds", "fish", "fishes",
    "rabbit", "rabbits", "hamster", "hamsters", "guinea pig", "guinea pigs",
    "ferret", "ferrets", "reptile", "reptiles", "turtle", "turtles",
    "snake", "snakes", "lizard", "lizards", "parrot", "parrots",
    "canary", "canaries", "goldfish", "budgie", "budgies",
    // Care activities
    "feeding", "food", "nutrition", "diet", "eating", "treats", "kibble",
    "grooming", "brushing", "bathing", "nail", "nails", "claws", "fur", "coat",
    "exercise", "walk", "walking", "walks", "play", "playing", "toy", "toys",
    "training", "obedience", "behavior", "behaviour", "discipline", "commands",
    // Health
    "vet", "veterinarian", "veterinary", "health", "sick", "illness", "disease",
    "vaccination", "vaccinations", "vaccine", "vaccines", "medicine", "medication",
    "treatment", "injury", "wound", "pain", "symptoms", "checkup", "examination",
    "flea", "fleas", "tick", "ticks", "worm", "worms", "parasite", "parasites",
    "allergy", "allergies", "allergic",
    // Supplies
    "collar", "collars", "leash", "leashes", "harness", "bed", "beds",
    "crate", "crates", "cage", "cages", "litter", "bowl", "bowls",
    "feeder", "feeders", "carrier", "carriers", "scratching post",
    // Behaviours
    "barking", "bark", "meowing", "meow", "purring", "purr", "scratching",
    "scratch", "biting", "bite", "chewing", "chew", "shedding", "shed",
    "house training", "potty training", "litter box", "aggressive", "friendly",
    "playful", "anxious", "stressed", "hyperactive",
    // Life stages
    "adult", "senior", "elderly", "young", "old", "breeding", "pregnancy",
    "birth", "adoption", "rescue", "shelter",
    // Pet-specific terms
    "paw", "paws", "tail", "tails", "whiskers", "breed", "breeds",
    "spay", "neuter", "microchip", "pet insurance",
];

pub const PET_PATTERNS: &[&str] = &[
    r"my (dog|cat|pet|puppy|kitten|bird|fish|rabbit|hamster)",
    r"how to (train|feed|groom|care for|walk|bathe)",
    r"what (food|treats|toys|medicine) (for|should)",
    r"is it (safe|okay|good|bad) for (pets|dogs|cats|animals)",
    r"can (dogs|cats|pets|animals) (eat|have|do|play)",
    r"why does my (dog|cat|pet|animal)",
    r"how often should (i|you|we) (feed|walk|groom|bathe)",
    r"best (food|toys|treats|medicine|vet) for",
    r"pet (insurance|care|health|training|behavior|nutrition)",
    r"(dog|cat|pet) (training|behavior|health|nutrition|grooming)",
    r"veterinary|veterinarian|vet (advice|care|visit|checkup)",
    r"animal (care|health|behavior|training|nutrition)",
];

pub const PET_RESPONSES: &[CannedResponse] = &[
    CannedResponse {
        text: "🐾 That's a great question about pet care! For the best advice tailored to your pet's specific needs, I recommend consulting with a qualified veterinarian. They can provide personalized guidance based on your pet's breed, age, health status, and individual requirements.",
        category: "general_advice",
    },
    CannedResponse {
        text: "🥗 Pet nutrition is crucial for your furry friend's health! Choose high-quality food appropriate for your pet's age, size, and activity level. Always transition to new foods gradually over 7-10 days, and consult your veterinarian before making significant dietary changes.",
        category: "nutrition",
    },
    CannedResponse {
        text: "🏃‍♂️ Regular exercise is essential for your pet's physical and mental well-being! Dogs typically need 30 minutes to 2 hours of activity daily depending on their breed and age, while cats benefit from 10-15 minutes of interactive play sessions multiple times a day.",
        category: "exercise",
    },
    CannedResponse {
        text: "✂️ Pet grooming is vital for health and hygiene! Regular brushing prevents matting and reduces shedding, nail trimming prevents overgrowth and injury, and dental care prevents periodontal disease. Establish a routine early to make grooming a positive experience.",
        category: "grooming",
    },
    CannedResponse {
        text: "🏥 If you notice any changes in your pet's behavior, appetite, energy levels, or bathroom habits, it's important to schedule a veterinary visit. Early detection and treatment of health issues can prevent more serious problems and ensure your pet's well-being.",
        category: "health_monitoring",
    },
    CannedResponse {
        text: "🎓 Pet training requires patience, consistency, and positive reinforcement! Reward good behavior with treats, praise, or playtime. Keep training sessions short (5-10 minutes) and frequent. Remember, every pet learns at their own pace.",
        category: "training",
    },
    CannedResponse {
        text: "🏠 Creating a safe environment for your pet includes pet-proofing your home, providing comfortable sleeping areas, ensuring access to fresh water, and maintaining appropriate temperature. Remove toxic plants, secure hazardous items, and create designated spaces for eating and resting.",
        category: "environment",
    },
    CannedResponse {
        text: "💉 Vaccinations and regular check-ups are fundamental for preventing diseases and maintaining your pet's health. Follow your veterinarian's recommended vaccination schedule, and don't skip annual or bi-annual wellness exams even if your pet seems healthy.",
        category: "preventive_care",
    },
    CannedResponse {
        text: "🧸 Mental stimulation is just as important as physical exercise! Provide puzzle toys, rotate toys regularly, teach new tricks, and engage in interactive play. Mental enrichment prevents boredom-related behavioral issues and keeps your pet's mind sharp.",
        category: "mental_stimulation",
    },
    CannedResponse {
        text: "👥 Proper socialization helps your pet become well-adjusted and confident. Expose them to different people, animals, environments, and experiences in a controlled, positive manner. Start early, but remember that socialization is a lifelong process.",
        category: "socialization",
    },
];

pub const NON_PET_RESPONSES: &[&str] = &[
    "🐾 I'm RoshanGPT, your dedicated Pet Care Assistant! I'm specifically designed to help with pet-related questions and concerns. Please ask me about pet care, health, nutrition, training, or any other pet-related topics, and I'll be happy to assist you!",
    "🐕 I specialize exclusively in pet care and animal-related topics! Whether you have questions about dog training, cat nutrition, pet health, grooming tips, or any other pet care concerns, I'm here to help. What would you like to know about your furry, feathered, or scaled friends?",
    "🐱 As your Pet Care Assistant, I focus on providing helpful information about pets and animals. I can assist with questions about pet behavior, health, nutrition, training, grooming, and general pet care. Please feel free to ask me anything related to your beloved pets!",
    "🦮 I'm designed to be your go-to resource for all things pet-related! From puppy training tips to senior pet care, from choosing the right food to understanding pet behavior - I'm here to help with your pet care journey. What pet-related question can I answer for you today?",
    "🐾 My expertise lies in pet care and animal welfare! I can provide guidance on pet health, nutrition, training, grooming, behavior, and much more. Please ask me about your pets, and I'll do my best to provide helpful, informative responses tailored to your pet care needs.",
];

/// 發生未預期錯誤時的固定回覆
pub const TECHNICAL_DIFFICULTIES: &str = "I apologize, but I'm experiencing some technical difficulties. Please try again in a moment, or consult with a veterinarian for immediate pet care concerns.";

pub const CAPABILITIES: &[&str] = &[
    "AI-powered pet care advice",
    "Pet health guidance",
    "Pet nutrition information",
    "Pet training tips",
    "Pet behavior insights",
    "Non-pet query redirection",
    "Personalized responses",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keywords_are_lowercase_and_distinct() {
        let unique: HashSet<&str> = PET_KEYWORDS.iter().copied().collect();
        assert_eq!(unique.len(), PET_KEYWORDS.len());
        assert!(PET_KEYWORDS.iter().all(|k| *k == k.to_lowercase()));
    }

    #[test]
    fn test_response_pools_are_populated() {
        assert_eq!(PET_RESPONSES.len(), 10);
        assert_eq!(NON_PET_RESPONSES.len(), 5);
        let categories: HashSet<&str> = PET_RESPONSES.iter().map(|r| r.category).collect();
        assert_eq!(categories.len(), PET_RESPONSES.len());
    }
}
