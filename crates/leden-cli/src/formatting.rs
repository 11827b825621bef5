use leden_data::Member;

macro_rules! next_attr {
    ($old:ident, $new:ident) => {
        if $old != $new {
            format!(" -> {}", $new)
        } else {
            "".to_string()
        }
    };
    ($old:ident, $new:ident, $attr:ident) => {
        if $old.$attr != $new.$attr {
            format!(" -> {}", $new.$attr)
        } else {
            "".to_string()
        }
    };
}

fn checkbox(value: bool) -> &'static str {
    if value {
        "[x]"
    } else {
        "[ ]"
    }
}

pub trait PrintFormatted {
    fn print_formatted(&self);
}

impl PrintFormatted for Member {
    fn print_formatted(&self) {
        println!("Lid id:\t\t\t{}", self.id);
        println!("Partner id:\t\t{}", self.partner_id);
        println!("Aanspreekvorm:\t\t{}", self.salutation);
        println!("Naam:\t\t\t{}", self.last_name);
        println!("Voornaam:\t\t{}", self.first_name);
        println!("Straat:\t\t\t{}", self.street);
        println!("Postcode:\t\t{}", self.postal_code);
        println!("Woonplaats:\t\t{}", self.city);
        println!("Landcode:\t\t{}", self.country);
        println!("Telefoon:\t\t{}", self.phone);
        println!("GSM:\t\t\t{}", self.mobile);
        println!("Email:\t\t\t{}", self.email);
        println!("Geboortedatum:\t\t{}", self.date_of_birth.format("%d/%m/%Y"));
        println!("Enieuwsbrief:\t\t{}", checkbox(self.email_newsletter));
        println!("Nieuwsbrief:\t\t{}", checkbox(self.paper_newsletter));
        println!("Actueel lid:\t\t{}", self.membership);
        println!("Lidgeld:\t\t{}", checkbox(self.fee_paid));
        println!("Begeleider:\t\t{}", checkbox(self.mentor));
    }
}

impl PrintFormatted for (Member, Member) {
    fn print_formatted(&self) {
        let (old, new) = self;

        println!("Lid id:\t\t\t{}", old.id);
        let next_partner = next_attr!(old, new, partner_id);
        println!("Partner id:\t\t{}{}", old.partner_id, next_partner);
        let next_salutation = next_attr!(old, new, salutation);
        println!("Aanspreekvorm:\t\t{}{}", old.salutation, next_salutation);
        let next_last_name = next_attr!(old, new, last_name);
        println!("Naam:\t\t\t{}{}", old.last_name, next_last_name);
        let next_first_name = next_attr!(old, new, first_name);
        println!("Voornaam:\t\t{}{}", old.first_name, next_first_name);
        let next_street = next_attr!(old, new, street);
        println!("Straat:\t\t\t{}{}", old.street, next_street);
        let next_postal_code = next_attr!(old, new, postal_code);
        println!("Postcode:\t\t{}{}", old.postal_code, next_postal_code);
        let next_city = next_attr!(old, new, city);
        println!("Woonplaats:\t\t{}{}", old.city, next_city);
        let next_country = next_attr!(old, new, country);
        println!("Landcode:\t\t{}{}", old.country, next_country);
        let next_phone = next_attr!(old, new, phone);
        println!("Telefoon:\t\t{}{}", old.phone, next_phone);
        let next_mobile = next_attr!(old, new, mobile);
        println!("GSM:\t\t\t{}{}", old.mobile, next_mobile);
        let next_email = next_attr!(old, new, email);
        println!("Email:\t\t\t{}{}", old.email, next_email);

        let born_old = old.date_of_birth.format("%d/%m/%Y").to_string();
        let born_new = new.date_of_birth.format("%d/%m/%Y").to_string();
        let next_born = next_attr!(born_old, born_new);
        println!("Geboortedatum:\t\t{}{}", born_old, next_born);

        let enews_old = checkbox(old.email_newsletter);
        let enews_new = checkbox(new.email_newsletter);
        let next_enews = next_attr!(enews_old, enews_new);
        println!("Enieuwsbrief:\t\t{}{}", enews_old, next_enews);

        let paper_old = checkbox(old.paper_newsletter);
        let paper_new = checkbox(new.paper_newsletter);
        let next_paper = next_attr!(paper_old, paper_new);
        println!("Nieuwsbrief:\t\t{}{}", paper_old, next_paper);

        let next_membership = next_attr!(old, new, membership);
        println!("Actueel lid:\t\t{}{}", old.membership, next_membership);

        let fee_old = checkbox(old.fee_paid);
        let fee_new = checkbox(new.fee_paid);
        let next_fee = next_attr!(fee_old, fee_new);
        println!("Lidgeld:\t\t{}{}", fee_old, next_fee);

        let mentor_old = checkbox(old.mentor);
        let mentor_new = checkbox(new.mentor);
        let next_mentor = next_attr!(mentor_old, mentor_new);
        println!("Begeleider:\t\t{}{}", mentor_old, next_mentor);
    }
}

impl PrintFormatted for Vec<Member> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:>7}\t{:<13}\t{:<16}\t{:<12}\t{:<24}\t{:>8}\t{:<16}\t{:<4}\t{:<16}\t{:<16}\t{:<28}\t{:<13}\t{:<7}\t{:<7}\t{:<7}\t{:<7}\t{}",
            "ID",
            "Partner",
            "Aanspreekvorm",
            "Naam",
            "Voornaam",
            "Straat",
            "Postcode",
            "Woonplaats",
            "Land",
            "Telefoon",
            "GSM",
            "Email",
            "Geboortedatum",
            "E-brief",
            "N-brief",
            "Actueel",
            "Lidgeld",
            "Begeleider"
        );
        println!("{:-<240}", "-");

        for member in self {
            println!(
                "{:>4}\t{:>7}\t{:<13}\t{:<16}\t{:<12}\t{:<24}\t{:>8}\t{:<16}\t{:<4}\t{:<16}\t{:<16}\t{:<28}\t{:<13}\t{:<7}\t{:<7}\t{:<7}\t{:<7}\t{}",
                member.id,
                member.partner_id,
                member.salutation.as_str(),
                member.last_name,
                member.first_name,
                member.street,
                member.postal_code,
                member.city,
                member.country.as_str(),
                member.phone,
                member.mobile,
                member.email,
                member.date_of_birth.format("%d/%m/%Y").to_string(),
                checkbox(member.email_newsletter),
                checkbox(member.paper_newsletter),
                member.membership.as_str(),
                checkbox(member.fee_paid),
                checkbox(member.mentor),
            );
        }
    }
}
