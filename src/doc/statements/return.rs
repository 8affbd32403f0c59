/*!
# `RETURN`

## Purpose
Go back to the statement after the last `GOSUB`.

## Remarks
See `GOSUB`. Without a pending `GOSUB` a `RETURN WITHOUT GOSUB`
error occurs.

## Example
```text
10 FOR I=1 TO 2:GOSUB 50:NEXT
20 END
50 PRINT "CALL";I
60 RETURN
RUN
CALL 1
CALL 2
```

*/
