pub static DID_SOV: &str = "did:sov:WRfXPg8dantKVubE3HX8pw";

pub static DID_DOC_SOV: &str = r##"
    {
        "id": "did:sov:WRfXPg8dantKVubE3HX8pw",
        "verificationMethod": [
            {
                "id": "did:sov:WRfXPg8dantKVubE3HX8pw#key-1",
                "type": "Ed25519VerificationKey2018",
                "controller": "did:sov:WRfXPg8dantKVubE3HX8pw",
                "publicKeyBase58": "H3C2AVvLMv6gmMNam3uVAjZpfkcJCwDwnZn6z3wXmqPV"
            }
        ],
        "authentication": ["#key-1"],
        "keyAgreement": [
            {
                "id": "did:sov:WRfXPg8dantKVubE3HX8pw#key-agreement-1",
                "type": "X25519KeyAgreementKey2019",
                "controller": "did:sov:WRfXPg8dantKVubE3HX8pw",
                "publicKeyBase58": "Fbj2fMpAzLgzqA3H9zVDGDK1WANfSS84yWRJUY1ALxGY"
            }
        ],
        "service": [
            {
                "id": "did:sov:WRfXPg8dantKVubE3HX8pw#indy",
                "type": "IndyAgent",
                "serviceEndpoint": "https://agent.example.com:8080",
                "recipientKeys": ["H3C2AVvLMv6gmMNam3uVAjZpfkcJCwDwnZn6z3wXmqPV"],
                "routingKeys": ["8HH5gYEeNc3z7PYXmd54d4x6qAfCNrqQqEB3nS7Zfu7K"],
                "priority": 0
            }
        ]
    }
"##;

pub static DIDCOMM_DID_DOC_SOV: &str = r##"
    {
        "did": "did:sov:WRfXPg8dantKVubE3HX8pw",
        "verification_methods": [
            {
                "id": "did:sov:WRfXPg8dantKVubE3HX8pw#key-1",
                "type": "Ed25519VerificationKey2018",
                "controller": "did:sov:WRfXPg8dantKVubE3HX8pw",
                "verification_material": {
                    "format": "Base58",
                    "value": "H3C2AVvLMv6gmMNam3uVAjZpfkcJCwDwnZn6z3wXmqPV"
                }
            },
            {
                "id": "did:sov:WRfXPg8dantKVubE3HX8pw#key-agreement-1",
                "type": "X25519KeyAgreementKey2019",
                "controller": "did:sov:WRfXPg8dantKVubE3HX8pw",
                "verification_material": {
                    "format": "Base58",
                    "value": "Fbj2fMpAzLgzqA3H9zVDGDK1WANfSS84yWRJUY1ALxGY"
                }
            }
        ],
        "services": [
            {
                "id": "did:sov:WRfXPg8dantKVubE3HX8pw#indy",
                "kind": {
                    "Other": {
                        "type": "IndyAgent",
                        "serviceEndpoint": "https://agent.example.com:8080",
                        "recipientKeys": ["H3C2AVvLMv6gmMNam3uVAjZpfkcJCwDwnZn6z3wXmqPV"],
                        "routingKeys": ["8HH5gYEeNc3z7PYXmd54d4x6qAfCNrqQqEB3nS7Zfu7K"],
                        "priority": 0
                    }
                }
            }
        ],
        "key_agreements": ["did:sov:WRfXPg8dantKVubE3HX8pw#key-agreement-1"],
        "authentications": ["#key-1"]
    }
"##;
