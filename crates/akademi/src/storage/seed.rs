//! Default site content.
//!
//! Writes the content the site ships with into an empty data directory so
//! that a fresh install renders complete pages.

use tracing::{debug, info};

use super::ContentStore;
use crate::content::{ContactInfo, Faq, ResourceKind, Testimonial, Training, WorkingHours};
use crate::error::Result;

/// What a seeding run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Resources whose files were written.
    pub written: Vec<ResourceKind>,
    /// Resources left alone because their files already existed.
    pub skipped: Vec<ResourceKind>,
}

/// Write default content for every resource whose file is missing.
///
/// With `force`, existing files are overwritten as well.
///
/// # Errors
///
/// Returns an error if a data file cannot be written.
pub fn seed_defaults(store: &ContentStore, force: bool) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for kind in ResourceKind::ALL {
        let exists = match kind {
            ResourceKind::Trainings => store.trainings.exists(),
            ResourceKind::Testimonials => store.testimonials.exists(),
            ResourceKind::Faqs => store.faqs.exists(),
            ResourceKind::LinkedInContents => store.linkedin_contents.exists(),
            ResourceKind::Contact => store.contact.exists(),
        };
        if exists && !force {
            debug!("Keeping existing {kind} data");
            report.skipped.push(kind);
            continue;
        }

        match kind {
            ResourceKind::Trainings => store.trainings.replace_all(&default_trainings())?,
            ResourceKind::Testimonials => {
                store.testimonials.replace_all(&default_testimonials())?;
            }
            ResourceKind::Faqs => store.faqs.replace_all(&default_faqs())?,
            ResourceKind::LinkedInContents => store.linkedin_contents.replace_all(&[])?,
            ResourceKind::Contact => store.contact.save(&default_contact())?,
        }
        report.written.push(kind);
    }

    info!(
        "Seeded {} resources, kept {}",
        report.written.len(),
        report.skipped.len()
    );
    Ok(report)
}

fn training(
    id: &str,
    title: &str,
    description: &str,
    features: [&str; 3],
    duration: &str,
    icon_color: &str,
) -> Training {
    Training {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        features: features.iter().map(|f| (*f).to_string()).collect(),
        duration: duration.to_string(),
        icon_color: icon_color.to_string(),
    }
}

/// The six standard training programmes.
#[must_use]
pub fn default_trainings() -> Vec<Training> {
    vec![
        training(
            "1",
            "Liderlik Eğitimleri",
            "Etkili liderlik becerileri kazanmak ve takım yönetiminde başarılı olmak için kapsamlı programlar.",
            ["Stratejik Liderlik", "Takım Yönetimi", "Motivasyon Teknikleri"],
            "16 Saat • Sertifikalı",
            "blue",
        ),
        training(
            "2",
            "İletişim Becerileri",
            "Etkili iletişim kurma, çatışma çözme ve müzakere becerilerinizi geliştirin.",
            ["Etkili İletişim Teknikleri", "Çatışma Yönetimi", "Müzakere Becerileri"],
            "12 Saat • Sertifikalı",
            "green",
        ),
        training(
            "3",
            "Performans Yönetimi",
            "Çalışan performansını değerlendirme, geliştirme ve optimize etme yöntemlerini öğrenin.",
            ["Performans Değerlendirme", "Hedef Belirleme", "Gelişim Planları"],
            "20 Saat • Sertifikalı",
            "purple",
        ),
        training(
            "4",
            "İK Mevzuatı",
            "İş hukuku, sosyal güvenlik mevzuatı ve İK uygulamalarında yasal gereklilikler.",
            ["İş Kanunu", "Sosyal Güvenlik", "İK Uygulamaları"],
            "24 Saat • Sertifikalı",
            "red",
        ),
        training(
            "5",
            "İşe Alım ve Seçim",
            "Doğru adayı bulma, değerlendirme ve seçim süreçlerini etkin şekilde yönetme.",
            ["Aday Bulma Yöntemleri", "Mülakat Teknikleri", "Değerlendirme Yöntemleri"],
            "18 Saat • Sertifikalı",
            "yellow",
        ),
        training(
            "6",
            "Çalışan Gelişimi",
            "Çalışan potansiyelini keşfetme, geliştirme ve kariyer planlama stratejileri.",
            ["Yetenek Yönetimi", "Kariyer Planlama", "Mentoring ve Koçluk"],
            "14 Saat • Sertifikalı",
            "indigo",
        ),
    ]
}

/// The two launch testimonials.
#[must_use]
pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".to_string(),
            company_name: "ABC Şirketi A.Ş.".to_string(),
            company_initials: "AŞ".to_string(),
            sector: "Teknoloji Sektörü".to_string(),
            testimonial_text: "Derin Akademi ile çalışmak şirketimizin İK süreçlerinde devrim yarattı. Özellikle performans yönetimi konusundaki uzmanlıkları sayesinde çalışan verimliliğimiz %40 arttı.".to_string(),
            author_name: "Ahmet Yılmaz".to_string(),
            author_title: "İK Müdürü".to_string(),
            rating: 5,
            bg_color: "blue".to_string(),
        },
        Testimonial {
            id: "2".to_string(),
            company_name: "XYZ Holding".to_string(),
            company_initials: "XY".to_string(),
            sector: "Finansal Hizmetler".to_string(),
            testimonial_text: "Liderlik eğitimlerinde aldığımız hizmet mükemmeldi. Yönetici kadromuzun liderlik becerileri gözle görülür şekilde gelişti. Özellikle iletişim modülü çok faydalıydı.".to_string(),
            author_name: "Ayşe Demir".to_string(),
            author_title: "Genel Müdür".to_string(),
            rating: 5,
            bg_color: "green".to_string(),
        },
    ]
}

/// The standard questions on the contact page.
#[must_use]
pub fn default_faqs() -> Vec<Faq> {
    [
        (
            "Eğitim programlarınız ne kadar sürüyor?",
            "Eğitim programlarımızın süreleri içeriklerine göre değişmektedir. Temel eğitimlerimiz 8-12 saat, kapsamlı programlarımız ise 16-24 saat arasındadır. Detaylı bilgi için iletişime geçebilirsiniz.",
        ),
        (
            "Şirket içi eğitim hizmeti veriyor musunuz?",
            "Evet, şirket içi eğitim hizmeti vermekteyiz. İhtiyaçlarınıza özel eğitim programları hazırlayarak ekibinize özel çözümler sunabiliriz.",
        ),
        (
            "Danışmanlık süreçleriniz nasıl işliyor?",
            "Öncelikle ücretsiz bir ön görüşme yapıyoruz. Ardından ihtiyaç analizi gerçekleştiriyor ve size özel çözüm önerileri sunuyoruz. Proje boyunca sürekli destek ve takip sağlıyoruz.",
        ),
        (
            "Eğitim sonrası sertifika veriliyor mu?",
            "Tüm eğitim programlarımızı başarıyla tamamlayan katılımcılara Derin Akademi sertifikası verilmektedir.",
        ),
    ]
    .iter()
    .zip(1..)
    .map(|((question, answer), id)| Faq {
        id: id.to_string(),
        question: (*question).to_string(),
        answer: (*answer).to_string(),
    })
    .collect()
}

/// Placeholder contact details until the real ones are entered.
#[must_use]
pub fn default_contact() -> ContactInfo {
    ContactInfo {
        address: "İstanbul, Türkiye".to_string(),
        address_detail: "Detaylı adres bilgisi için iletişime geçiniz.".to_string(),
        phone: "+90 XXX XXX XX XX".to_string(),
        phone_hours: "Pazartesi - Cuma: 09:00 - 18:00".to_string(),
        email: "info@derinakademi.com".to_string(),
        email_response: "24 saat içinde dönüş yapıyoruz".to_string(),
        working_hours: WorkingHours {
            weekdays: "Pazartesi - Cuma: 09:00 - 18:00".to_string(),
            saturday: "Cumartesi: 10:00 - 14:00".to_string(),
            sunday: "Pazar kapalı".to_string(),
        },
        whatsapp: "https://wa.me/90XXXXXXXXX".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_empty_dir_writes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::open(dir.path()).unwrap();

        let report = seed_defaults(&store, false).unwrap();
        assert_eq!(report.written, ResourceKind::ALL.to_vec());
        assert!(report.skipped.is_empty());

        let stats = store.stats().unwrap();
        assert_eq!(stats.trainings, 6);
        assert_eq!(stats.testimonials, 2);
        assert_eq!(stats.faqs, 4);
        assert_eq!(stats.linkedin_contents, 0);
        assert!(stats.contact_present);
        assert!(store.linkedin_contents.exists());
    }

    #[test]
    fn test_seed_is_idempotent_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::open(dir.path()).unwrap();
        seed_defaults(&store, false).unwrap();
        store.faqs.delete("1").unwrap();

        let report = seed_defaults(&store, false).unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.skipped.len(), ResourceKind::ALL.len());
        assert_eq!(store.faqs.count().unwrap(), 3);
    }

    #[test]
    fn test_seed_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::open(dir.path()).unwrap();
        seed_defaults(&store, false).unwrap();
        store.faqs.delete("1").unwrap();

        let report = seed_defaults(&store, true).unwrap();
        assert_eq!(report.written.len(), ResourceKind::ALL.len());
        assert_eq!(store.faqs.count().unwrap(), 4);
    }

    #[test]
    fn test_seed_only_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::open(dir.path()).unwrap();
        store.faqs.replace_all(&[]).unwrap();

        let report = seed_defaults(&store, false).unwrap();
        assert_eq!(report.skipped, vec![ResourceKind::Faqs]);
        assert_eq!(store.faqs.count().unwrap(), 0);
    }

    #[test]
    fn test_default_ids_are_unique() {
        let ids: Vec<_> = default_trainings().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);

        let ids: Vec<_> = default_faqs().into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_default_trainings_have_features() {
        assert!(default_trainings().iter().all(|t| t.features.len() == 3));
    }
}
