//! Wire-format vectors for every transaction type, checked against signed
//! transactions produced by the reference network tooling (testnet,
//! nonce 1, gas coin MNT).

use minter_tx::{MultisendRecipient, Transaction, TxData, TESTNET_CHAIN_ID};
use minter_util::units::to_pip;

const KEY_A: &str = "07bc17abdcee8b971bb8723e36fe9d2523306d5ab2d683631693238e0f9df142";
const KEY_B: &str = "6e1df6ec69638d152f563c5eca6c13cdb5db4055861efc11ec1cdd578afd96bf";
const KEY_C: &str = "05ddcd4e6f7d248ed1388f0091fe345bf9bf4fc2390384e26005e7675c98b3c1";

const FROM_A: &str = "Mx31e61a05adbd13c6b625262704bc305bf7725026";
const PUB_KEY: &str = "Mp0eb98ea04ae466d8d38f490db3c99b3996a90e24243952ce9822c6dc1e2c1a43";

fn testnet_tx(data: TxData) -> Transaction {
    Transaction::new(1, TESTNET_CHAIN_ID, "MNT", data)
}

fn assert_signs_to(data: TxData, key: &str, expected: &str) -> String {
    let mut tx = testnet_tx(data);
    assert_eq!(tx.sign(Some(key), None).unwrap(), expected);

    let decoded = Transaction::from_raw(expected).unwrap();
    assert_eq!(decoded.transaction, tx);
    decoded.from
}

#[test]
fn sell_vector() {
    let from = assert_signs_to(
        TxData::Sell {
            coin_to_sell: "MNT".into(),
            value_to_sell: to_pip("1").unwrap(),
            coin_to_buy: "TEST".into(),
            min_value_to_buy: to_pip("1").unwrap(),
        },
        KEY_A,
        "f8830102018a4d4e540000000000000002a9e88a4d4e5400000000000000880de0b6b3a76400008a5445\
         5354000000000000880de0b6b3a7640000808001b845f8431ba0e34be907a18acb5a1aed263ef419f32f\
         5adc6e772b92f949906b497bba557df3a0291d7704980994f7a6f5950ca84720746b5928f21c3cfc5a5f\
         bca2a9f4d35db0",
    );
    assert_eq!(from, FROM_A);
}

#[test]
fn sell_all_vector() {
    assert_signs_to(
        TxData::SellAll {
            coin_to_sell: "MNT".into(),
            coin_to_buy: "TEST".into(),
            min_value_to_buy: to_pip("1").unwrap(),
        },
        KEY_A,
        "f87a0102018a4d4e540000000000000003a0df8a4d4e54000000000000008a5445535400000000000088\
         0de0b6b3a7640000808001b845f8431ca0b10794a196b6ad2f94e6162613ca9538429dd49ca493594ba9\
         d99f80d2499765a03c1d78e9e04f57336691e8812a16faccb00bf92ac817ab61cd9bf001e9380d47",
    );
}

#[test]
fn buy_vector() {
    let from = assert_signs_to(
        TxData::Buy {
            coin_to_buy: "TEST".into(),
            value_to_buy: to_pip("1").unwrap(),
            coin_to_sell: "MNT".into(),
            max_value_to_sell: to_pip("1").unwrap(),
        },
        KEY_A,
        "f8830102018a4d4e540000000000000004a9e88a54455354000000000000880de0b6b3a76400008a4d4e\
         5400000000000000880de0b6b3a7640000808001b845f8431ca04ee095a20ca58062a5758e2a6d394185\
         7daa8943b5873c57f111190ca88dbc56a01148bf2fcc721ca353105e4f4a3419bec471d7ae08173f443a\
         28c3ae6d27018a",
    );
    assert_eq!(from, FROM_A);
}

#[test]
fn create_coin_vector() {
    assert_signs_to(
        TxData::CreateCoin {
            name: "SUPER TEST".into(),
            symbol: "SPRTEST".into(),
            initial_amount: to_pip("100").unwrap(),
            initial_reserve: to_pip("10").unwrap(),
            crr: 10,
            max_supply: to_pip("1000").unwrap(),
        },
        KEY_A,
        "f88f0102018a4d4e540000000000000005b5f48a535550455220544553548a535052544553540000008905\
         6bc75e2d63100000888ac7230489e800000a893635c9adc5dea00000808001b845f8431ca0ccfabd9283d2\
         7cf7978bca378e0cc7dc69a39ff3bdc56707fa2d552655f9290da0226057221cbaef35696c9315cd29e783\
         d3c66d842d0a3948a922abb42ca0dabe",
    );
}

#[test]
fn declare_candidacy_vector() {
    assert_signs_to(
        TxData::DeclareCandidacy {
            address: "Mx9f7fd953c2c69044b901426831ed03ee0bd0597a".into(),
            pub_key: PUB_KEY.into(),
            commission: 10,
            coin: "MNT".into(),
            stake: to_pip("5").unwrap(),
        },
        KEY_B,
        "f8a80102018a4d4e540000000000000006b84df84b949f7fd953c2c69044b901426831ed03ee0bd0597aa0\
         0eb98ea04ae466d8d38f490db3c99b3996a90e24243952ce9822c6dc1e2c1a430a8a4d4e54000000000000\
         00884563918244f40000808001b845f8431ca0c379230cbe09103b31983402c9138ad29d839bcecee70e11\
         ac9bf5cfe70850d9a06c92bfb9a627bfaefc3ad46fc60ff1fdc42efe0e8805d57f20795a403c91e8bd",
    );
}

#[test]
fn delegate_vector() {
    let expected =
        "f8900102018a4d4e540000000000000007b6f5a00eb98ea04ae466d8d38f490db3c99b3996a90e24243952\
         ce9822c6dc1e2c1a438a4d4e5400000000000000888ac7230489e80000808001b845f8431ba01c2c8f702d\
         80cf64da1e9bf1f07a52e2fee8721aebe419aa9f62260a98983f89a07ed297d71d9dc37a57ffe9bb16915d\
         ccc703d8c09f30da8aadb9d5dbab8c7da9";

    let from = assert_signs_to(
        TxData::Delegate {
            pub_key: PUB_KEY.into(),
            coin: "MNT".into(),
            stake: to_pip("10").unwrap(),
        },
        KEY_B,
        expected,
    );
    assert_eq!(from, "Mx9f7fd953c2c69044b901426831ed03ee0bd0597a");
}

#[test]
fn unbond_vector() {
    // The reference signature carries a 31-byte s scalar, so this vector
    // also pins minimal integer encoding inside signatures.
    assert_signs_to(
        TxData::Unbond {
            pub_key: PUB_KEY.into(),
            coin: "MNT".into(),
            value: to_pip("10").unwrap(),
        },
        KEY_B,
        "f88f0102018a4d4e540000000000000008b6f5a00eb98ea04ae466d8d38f490db3c99b3996a90e24243952\
         ce9822c6dc1e2c1a438a4d4e5400000000000000888ac7230489e80000808001b844f8421ca0ff5766c858\
         47b37a276f3f9d027fb7c99745920fa395c7bd399cedd8265c5e1d9f791bcdfe4d1bc1e73ada7bf833103c\
         828f22d83189dad2b22ad28a54aacf2a",
    );
}

#[test]
fn redeem_check_vector() {
    assert_signs_to(
        TxData::RedeemCheck {
            check: "Mcf89b01830f423f8a4d4e5400000000000000843b9aca00b8419b3beac2c6ad88a8bd54d249\
                    12754bb820e58345731cb1b9bc0885ee74f9e50a58a80aa990a29c98b05541b266af99d382\
                    5bb1e5ed4e540c6e2f7c9b40af9ecc011ca00f7ba6d0aa47d74274b960fba02be03158d037\
                    4b978dcaa5f56fc7cf1754f821a019a829a3b7bba2fc290f5c96e469851a3876376d6a6a4d\
                    f937327b3a5e9e8297"
                .into(),
            proof: "da021d4f84728e0d3d312a18ec84c21768e0caa12a53cb0a1452771f72b0d1a91770ae139f\
                    d6c23bcf8cec50f5f2e733eabb8482cf29ee540e56c6639aac469600"
                .into(),
        },
        KEY_C,
        "f9013f0102018a4d4e540000000000000009b8e4f8e2b89df89b01830f423f8a4d4e5400000000000000\
         843b9aca00b8419b3beac2c6ad88a8bd54d24912754bb820e58345731cb1b9bc0885ee74f9e50a58a80a\
         a990a29c98b05541b266af99d3825bb1e5ed4e540c6e2f7c9b40af9ecc011ca00f7ba6d0aa47d74274b9\
         60fba02be03158d0374b978dcaa5f56fc7cf1754f821a019a829a3b7bba2fc290f5c96e469851a387637\
         6d6a6a4df937327b3a5e9e8297b841da021d4f84728e0d3d312a18ec84c21768e0caa12a53cb0a145277\
         1f72b0d1a91770ae139fd6c23bcf8cec50f5f2e733eabb8482cf29ee540e56c6639aac469600808001b8\
         45f8431ba009493b3296a085a27f2bc015ad5c1cc644ba21bdce1b78a49e987227f24a87a3a07187da48\
         b6ea528d372ed33923f5d74011f56cc2db3cab2cf5b4bbab97990373",
    );
}

#[test]
fn set_candidate_on_vector() {
    assert_signs_to(
        TxData::SetCandidateOn {
            pub_key: PUB_KEY.into(),
        },
        KEY_C,
        "f87c0102018a4d4e54000000000000000aa2e1a00eb98ea04ae466d8d38f490db3c99b3996a90e242439\
         52ce9822c6dc1e2c1a43808001b845f8431ba0095aed433171fe5ac385ccd299507bdcad3dd2269794fd\
         0d14d4f58327ddc87ea046ec7e4f8f9b477a1255485f36e0567e62283723ecc5a0bd1e5d201e53e85245",
    );
}

#[test]
fn set_candidate_off_vector() {
    assert_signs_to(
        TxData::SetCandidateOff {
            pub_key: PUB_KEY.into(),
        },
        KEY_C,
        "f87c0102018a4d4e54000000000000000ba2e1a00eb98ea04ae466d8d38f490db3c99b3996a90e242439\
         52ce9822c6dc1e2c1a43808001b845f8431ca02ac45817f167c34b55b8afa0b6d9692be28e2aa41dd28a\
         134663d1f5bebb5ad8a06d5f161a625701d506db20c497d24e9939c2e342a6ff7d724cb1962267bd4ba5",
    );
}

#[test]
fn create_multisig_vector() {
    let expected =
        "f8a30102018a4d4e54000000000000000cb848f84607c3010305f83f94ee81347211c72524338f96800\
         72af9074433314394ee81347211c72524338f9680072af9074433314594ee81347211c72524338f9680\
         072af90744333144808001b845f8431ca094eb41d39e6782f5539615cc66da7073d4283893f0b3ee2b2\
         f36aee1eaeb7c57a037f90ffdb45eb9b6f4cf301b48e73a6a81df8182e605b656a52057537d264ab4";

    let from = assert_signs_to(
        TxData::CreateMultisig {
            threshold: 7,
            weights: vec![1, 3, 5],
            addresses: vec![
                "Mxee81347211c72524338f9680072af90744333143".into(),
                "Mxee81347211c72524338f9680072af90744333145".into(),
                "Mxee81347211c72524338f9680072af90744333144".into(),
            ],
        },
        "bc3503cae8c8561df5eadc4a9eda21d32c252a6c94cfae55b5310bf6085c8582",
        expected,
    );
    assert_eq!(from, "Mx3e4d56e776ff42c023b1ec99a7486b592a654981");
}

#[test]
fn multisend_vector() {
    assert_signs_to(
        TxData::Multisend {
            recipients: vec![
                MultisendRecipient {
                    coin: "MNT".into(),
                    to: "Mxfe60014a6e9ac91618f5d1cab3fd58cded61ee99".into(),
                    value: to_pip("0.1").unwrap(),
                },
                MultisendRecipient {
                    coin: "MNT".into(),
                    to: "Mxddab6281766ad86497741ff91b6b48fe85012e3c".into(),
                    value: to_pip("0.2").unwrap(),
                },
            ],
        },
        KEY_A,
        "f8b30102018a4d4e54000000000000000db858f856f854e98a4d4e540000000000000094fe60014a6e9a\
         c91618f5d1cab3fd58cded61ee9988016345785d8a0000e98a4d4e540000000000000094ddab6281766a\
         d86497741ff91b6b48fe85012e3c8802c68af0bb140000808001b845f8431ca0b15dcf2e013df1a2aea0\
         2e36a17af266d8ee129cdcb3e881d15b70c9457e7571a0226af7bdaca9d42d6774c100b22e0c7ba4ec8d\
         d664d17986318e905613013283",
    );
}

#[test]
fn edit_candidate_vector() {
    let expected =
        "f8a80102018a4d4e54000000000000000eb84df84ba04ae1ee73e6136c85b0ca933a9a1347758a334885\
         f10b3238398a67ac2eb153b89489e5dc185e6bab772ac8e00cf3fb3f4cb0931c4794e731fcddd37bb6e7\
         2286597d22516c8ba3ddffa0808001b845f8431ca0421470f27f78231b669c1bf1fcc56168954d64fbb7\
         dc3ff021bab01311fab6eaa075e86365d98c87e806fcbc5c542792f569e19d8ae7af671d9ba4679acc86\
         d35e";

    let from = assert_signs_to(
        TxData::EditCandidate {
            pub_key: "Mp4ae1ee73e6136c85b0ca933a9a1347758a334885f10b3238398a67ac2eb153b8".into(),
            reward_address: "Mx89e5dc185e6bab772ac8e00cf3fb3f4cb0931c47".into(),
            owner_address: "Mxe731fcddd37bb6e72286597d22516c8ba3ddffa0".into(),
        },
        "a3fb55450f53dbbf4f2494280188f7f0cd51a7b51ec27ed49ed364d920e326ba",
        expected,
    );
    assert_eq!(from, "Mxa879439b0a29ecc7c5a0afe54b9eb3c22dbde8d9");
}

mod multisig {
    use super::*;
    use minter_tx::signature::SIGNATURE_MULTI_TYPE;

    const KEYS: [&str; 3] = [
        "b354c3d1d456d5a1ddd65ca05fd710117701ec69d82dac1858986049a0385af9",
        "38b7dfb77426247aed6081f769ed8f62aaec2ee2b38336110ac4f7484478dccb",
        "94c0915734f92dd66acfdc48f82b1d0b208efd544fe763386160ec30c968b4af",
    ];
    const MS_ADDRESS: &str = "Mxdb4f4b6942cb927e8d7e3a1f602d0f1fb43b5bd2";
    const SIGNED: &str =
        "f901270102018a4d4e540000000000000001aae98a4d4e540000000000000094d82558ea00eb81d35f2\
         654953598f5d51737d31d880de0b6b3a7640000808002b8e8f8e694db4f4b6942cb927e8d7e3a1f602d\
         0f1fb43b5bd2f8cff8431ca0a116e33d2fea86a213577fc9dae16a7e4cadb375499f378b33cddd1d411\
         3b6c1a021ee1e9eb61bbd24233a0967e1c745ab23001cf8816bb217d01ed4595c6cb2cdf8431ca0f7f9\
         c7a6734ab2db210356161f2d012aa9936ee506d88d8d0cba15ad6c84f8a7a04b71b87cbbe7905942de8\
         39211daa984325a15bdeca6eea75e5d0f28f9aaeef8f8431ba0d8c640d7605034eefc8870a6a3d1c22e\
         2f589a9319288342632b1c4e6ce35128a055fe3f93f31044033fe7b07963d547ac50bccaac38a057ce6\
         1665374c72fb454";

    fn send_tx() -> Transaction {
        testnet_tx(TxData::Send {
            coin: "MNT".into(),
            to: "Mxd82558ea00eb81d35f2654953598f5d51737d31d".into(),
            value: to_pip("1").unwrap(),
        })
    }

    #[test]
    fn sign_with_all_keys_at_once() {
        let mut tx = send_tx();
        let signed = tx.sign_multisig(MS_ADDRESS, &KEYS, &[]).unwrap();
        assert_eq!(signed, SIGNED);
    }

    #[test]
    fn from_raw_sender_is_multisig_address() {
        let decoded = Transaction::from_raw(SIGNED).unwrap();
        assert_eq!(decoded.from, MS_ADDRESS);
        assert_eq!(
            decoded.transaction.data,
            TxData::Send {
                coin: "MNT".into(),
                to: "Mxd82558ea00eb81d35f2654953598f5d51737d31d".into(),
                value: to_pip("1").unwrap(),
            }
        );
    }

    #[test]
    fn add_signature_matches_all_at_once() {
        let mut tx = send_tx();
        let partial = tx.sign_multisig(MS_ADDRESS, &KEYS[..2], &[]).unwrap();
        assert_ne!(partial, SIGNED);

        let complete = Transaction::add_signature(&partial, KEYS[2]).unwrap();
        assert_eq!(complete, SIGNED);
    }

    #[test]
    fn sign_with_precomputed_signatures() {
        let tx = send_tx();
        let signatures: Vec<String> = KEYS
            .iter()
            .map(|key| tx.generate_signature(key, SIGNATURE_MULTI_TYPE).unwrap())
            .collect();
        let signature_refs: Vec<&str> = signatures.iter().map(String::as_str).collect();

        let mut tx = send_tx();
        let signed = tx.sign_multisig(MS_ADDRESS, &[], &signature_refs).unwrap();
        assert_eq!(signed, SIGNED);
    }

    #[test]
    fn sign_with_keys_and_signatures_mixed() {
        let tx = send_tx();
        let signatures: Vec<String> = KEYS
            .iter()
            .map(|key| tx.generate_signature(key, SIGNATURE_MULTI_TYPE).unwrap())
            .collect();

        // Two keys plus the third signature.
        let mut tx = send_tx();
        let signed = tx
            .sign_multisig(MS_ADDRESS, &KEYS[..2], &[&signatures[2]])
            .unwrap();
        assert_eq!(signed, SIGNED);

        // One key plus the remaining two signatures.
        let mut tx = send_tx();
        let signed = tx
            .sign_multisig(MS_ADDRESS, &KEYS[..1], &[&signatures[1], &signatures[2]])
            .unwrap();
        assert_eq!(signed, SIGNED);
    }
}
